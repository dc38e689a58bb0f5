//! BEM-style class name composition.
//!
//! `ClassNames::new("vl-legend").modifier("vertical", true).extra(Some("mine"))`
//! builds `"vl-legend vl-legend--vertical mine"`. Output is deterministic:
//! the base first, then active modifiers in call order, then extras.

/// Builder for a composed class string.
#[derive(Debug, Clone, Default)]
pub struct ClassNames {
    base: String,
    modifiers: Vec<String>,
    extras: Vec<String>,
}

impl ClassNames {
    pub fn new(base: impl Into<String>) -> Self {
        Self {
            base: base.into(),
            modifiers: Vec::new(),
            extras: Vec::new(),
        }
    }

    /// Add `{base}--{name}` when `active` is true.
    pub fn modifier(mut self, name: impl AsRef<str>, active: bool) -> Self {
        let name = name.as_ref().trim();
        if active && !name.is_empty() {
            self.modifiers.push(format!("{}--{}", self.base, name));
        }
        self
    }

    /// Add `{base}--{name}` when a value is present, e.g. a parsed token.
    pub fn modifier_opt(self, name: Option<&str>) -> Self {
        match name {
            Some(name) => self.modifier(name, true),
            None => self,
        }
    }

    /// Append a caller-supplied class string. `None` and blank strings are skipped.
    pub fn extra(mut self, extra: Option<&str>) -> Self {
        if let Some(extra) = extra.map(str::trim).filter(|e| !e.is_empty()) {
            self.extras.push(extra.to_string());
        }
        self
    }

    pub fn build(self) -> String {
        let mut parts = Vec::with_capacity(1 + self.modifiers.len() + self.extras.len());
        if !self.base.is_empty() {
            parts.push(self.base);
        }
        parts.extend(self.modifiers);
        parts.extend(self.extras);
        parts.join(" ")
    }
}

/// One-shot form of [`ClassNames`].
pub fn class_names(base: &str, modifiers: &[(&str, bool)], extra: Option<&str>) -> String {
    modifiers
        .iter()
        .fold(ClassNames::new(base), |names, (name, active)| {
            names.modifier(name, *active)
        })
        .extra(extra)
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_only() {
        assert_eq!(ClassNames::new("vl-panel").build(), "vl-panel");
    }

    #[test]
    fn test_modifiers_in_call_order() {
        let names = class_names(
            "vl-legend",
            &[("vertical", true), ("reversed", false), ("dense", true)],
            Some("  custom  "),
        );
        assert_eq!(names, "vl-legend vl-legend--vertical vl-legend--dense custom");
    }

    #[test]
    fn test_blank_extra_and_missing_token() {
        let names = ClassNames::new("vl-banner")
            .modifier_opt(None)
            .extra(Some(" "))
            .extra(None)
            .build();
        assert_eq!(names, "vl-banner");
    }
}
