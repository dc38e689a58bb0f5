//! Pass-through attribute filtering.
//!
//! Each component owns a static list of option names it interprets itself.
//! Everything else a caller hands it (`aria-*`, `data-*`, `id`, `role`, ...)
//! is forwarded untouched to the component's root element.

use crate::value::Attrs;
use ahash::AHashSet;

/// Names every component treats as its own.
///
/// `class` is merged with structural classes rather than forwarded.
pub const ALWAYS_RESERVED: &[&str] = &["class"];

/// The option names a component reserves.
#[derive(Debug, Clone)]
pub struct Reserved {
    names: AHashSet<&'static str>,
}

impl Reserved {
    /// Build the set from a component's option list plus [`ALWAYS_RESERVED`].
    pub fn new(names: &[&'static str]) -> Self {
        Self {
            names: names
                .iter()
                .chain(ALWAYS_RESERVED)
                .copied()
                .collect(),
        }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    /// Attributes not reserved, in their original order.
    pub fn forward(&self, attrs: &Attrs) -> Attrs {
        attrs
            .iter()
            .filter(|(name, _)| !self.contains(name))
            .map(|(name, value)| (name, value.clone()))
            .collect()
    }
}
