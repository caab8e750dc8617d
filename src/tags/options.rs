use std::fmt;
use std::sync::Arc;

use crate::validation::{ValidationMode, Validator};

/// Hook run on a trimmed candidate before validation
///
/// Returning `None` vetoes the candidate; returning `Some` replaces it.
pub type BeforeAdding = Arc<dyn Fn(&str) -> Option<String> + Send + Sync>;

/// Per-instance options for a [`TagInput`](super::TagInput)
///
/// Options are fixed once the input is constructed.
#[derive(Clone, Default)]
pub struct TagInputOptions {
    /// Permit equal tags to coexist
    pub allow_duplicates: bool,
    /// Suppress every mutation
    pub read_only: bool,
    /// Rule a candidate must satisfy
    pub validator: Validator,
    /// Maximum number of tags `add_new` will grow the list to
    pub limit: Option<usize>,
    /// Text shown by hosts while the pending entry is empty
    pub placeholder: String,
    /// Candidate rewrite / veto hook
    pub before_adding: Option<BeforeAdding>,
}

impl TagInputOptions {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn with_allow_duplicates(mut self, allow: bool) -> Self {
        self.allow_duplicates = allow;
        self
    }

    #[must_use]
    pub const fn with_read_only(mut self, read_only: bool) -> Self {
        self.read_only = read_only;
        self
    }

    /// Validate with one of the built-in shapes
    #[must_use]
    pub fn with_validation(mut self, mode: ValidationMode) -> Self {
        self.validator = Validator::Mode(mode);
        self
    }

    #[must_use]
    pub fn with_validator(mut self, validator: Validator) -> Self {
        self.validator = validator;
        self
    }

    #[must_use]
    pub const fn with_limit(mut self, limit: Option<usize>) -> Self {
        self.limit = limit;
        self
    }

    #[must_use]
    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    /// Install a hook that may rewrite or veto candidates
    #[must_use]
    pub fn with_before_adding<F>(mut self, hook: F) -> Self
    where
        F: Fn(&str) -> Option<String> + Send + Sync + 'static,
    {
        self.before_adding = Some(Arc::new(hook));
        self
    }
}

impl fmt::Debug for TagInputOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TagInputOptions")
            .field("allow_duplicates", &self.allow_duplicates)
            .field("read_only", &self.read_only)
            .field("validator", &self.validator)
            .field("limit", &self.limit)
            .field("placeholder", &self.placeholder)
            .field("before_adding", &self.before_adding.is_some())
            .finish()
    }
}
