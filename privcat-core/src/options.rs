/// How references between patterns and examples are checked at load time
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ReferencePolicy {
    /// Dangling ids are counted, logged and skipped during hydration
    #[default]
    Lenient,
    /// Dangling ids are validation errors
    Strict,
}

/// Options for [`crate::load_catalog`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadOptions {
    pub reference_policy: ReferencePolicy,
}

impl LoadOptions {
    pub fn strict() -> Self {
        Self {
            reference_policy: ReferencePolicy::Strict,
        }
    }
}
