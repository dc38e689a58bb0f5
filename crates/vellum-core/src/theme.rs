/// Class naming configuration shared by all components.
///
/// Constructed per render call; components never keep a global instance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    /// Prefix of every block class, e.g. `vl` in `vl-legend`.
    pub prefix: String,
}

impl Default for Theme {
    fn default() -> Self {
        Theme {
            prefix: "vl".to_string(),
        }
    }
}

impl Theme {
    pub fn with_prefix(prefix: impl Into<String>) -> Self {
        Theme {
            prefix: prefix.into(),
        }
    }

    /// Block class: `{prefix}-{block}`.
    pub fn block(&self, block: &str) -> String {
        if self.prefix.is_empty() {
            block.to_string()
        } else {
            format!("{}-{}", self.prefix, block)
        }
    }

    /// Element class: `{prefix}-{block}__{element}`.
    pub fn element(&self, block: &str, element: &str) -> String {
        format!("{}__{}", self.block(block), element)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_block_and_element_names() {
        let theme = Theme::default();
        assert_eq!(theme.block("legend"), "vl-legend");
        assert_eq!(theme.element("legend", "item"), "vl-legend__item");

        let bare = Theme::with_prefix("");
        assert_eq!(bare.element("panel", "header"), "panel__header");
    }
}
