//! The tag list manager
//!
//! Every rejection path (empty candidate, duplicate, failed validation,
//! full list, out-of-range index, read-only) is a silent no-op: state does
//! not change, no listener fires, and the only trace is a debug log line.

use std::fmt;

use log::debug;
use thiserror::Error;

use super::events::{ChangeListeners, TagsChanged};
use super::options::TagInputOptions;
use super::seed::SeedTag;

/// Why an edit was ignored. Logged, never surfaced to the host.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
enum Rejection {
    #[error("input is read-only")]
    ReadOnly,
    #[error("candidate is empty")]
    Empty,
    #[error("candidate vetoed by before-adding hook")]
    Vetoed,
    #[error("candidate '{candidate}' does not satisfy {rule}")]
    Invalid { candidate: String, rule: String },
    #[error("'{0}' is already a tag")]
    Duplicate(String),
    #[error("tag limit of {0} reached")]
    LimitReached(usize),
    #[error("index {index} out of range for {len} tag(s)")]
    OutOfRange { index: usize, len: usize },
    #[error("pending entry is not empty")]
    PendingNotEmpty,
}

/// Ordered tag list plus the entry the user is composing
///
/// # Examples
///
/// ```
/// use taginput::{TagInput, TagInputOptions, ValidationMode};
///
/// let mut input = TagInput::new(TagInputOptions::new().with_validation(ValidationMode::Digits));
/// input.set_pending("foo");
/// assert!(!input.add_new());
/// assert_eq!(input.pending(), "foo");
///
/// input.set_pending(" 123 ");
/// assert!(input.add_new());
/// assert_eq!(input.tags(), ["123"]);
/// assert_eq!(input.pending(), "");
/// ```
pub struct TagInput {
    tags: Vec<String>,
    pending: String,
    options: TagInputOptions,
    listeners: ChangeListeners,
}

impl TagInput {
    /// Create an empty input
    #[must_use]
    pub fn new(options: TagInputOptions) -> Self {
        Self::with_tags(options, Vec::<SeedTag>::new())
    }

    /// Create an input seeded with `seed`
    ///
    /// Seed values are trusted: they are coerced to strings but neither
    /// validated, de-duplicated, nor limited.
    pub fn with_tags<I, T>(options: TagInputOptions, seed: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<SeedTag>,
    {
        let tags: Vec<String> = seed.into_iter().map(|t| t.into().into_tag()).collect();
        debug!("tag input created with {} seeded tag(s): {:?}", tags.len(), options);
        Self {
            tags,
            pending: String::new(),
            options,
            listeners: ChangeListeners::new(),
        }
    }

    /// Current tags, in order
    #[must_use]
    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    /// The entry being composed
    #[must_use]
    pub fn pending(&self) -> &str {
        &self.pending
    }

    #[must_use]
    pub const fn options(&self) -> &TagInputOptions {
        &self.options
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.tags.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }

    #[must_use]
    pub const fn is_read_only(&self) -> bool {
        self.options.read_only
    }

    /// Whether the configured limit has been reached
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.options.limit.is_some_and(|limit| self.tags.len() >= limit)
    }

    /// Replace the pending entry
    pub fn set_pending(&mut self, text: impl Into<String>) {
        self.pending = text.into();
    }

    /// Mutable access to the pending entry, for hosts that edit in place
    pub fn pending_mut(&mut self) -> &mut String {
        &mut self.pending
    }

    pub fn clear_pending(&mut self) {
        self.pending.clear();
    }

    /// Register a "tags changed" listener
    pub fn on_change<F>(&mut self, listener: F)
    where
        F: FnMut(&TagsChanged) + 'static,
    {
        self.listeners.add(listener);
    }

    #[must_use]
    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    pub fn clear_listeners(&mut self) {
        self.listeners.clear();
    }

    /// Commit the pending entry as a new tag
    ///
    /// Returns whether the entry was accepted. On acceptance the trimmed
    /// candidate is appended, the pending entry is cleared and listeners are
    /// notified. On rejection nothing changes, including the pending entry.
    pub fn add_new(&mut self) -> bool {
        match self.accept_candidate() {
            Ok(tag) => {
                debug!("adding tag '{tag}'");
                self.tags.push(tag);
                self.pending.clear();
                self.notify();
                true
            }
            Err(rejection) => {
                debug!("add ignored: {rejection}");
                false
            }
        }
    }

    /// Remove the tag at `index`, keeping the order of the rest
    pub fn remove(&mut self, index: usize) -> bool {
        let result = if self.options.read_only {
            Err(Rejection::ReadOnly)
        } else if index >= self.tags.len() {
            Err(Rejection::OutOfRange { index, len: self.tags.len() })
        } else {
            Ok(self.tags.remove(index))
        };

        match result {
            Ok(removed) => {
                debug!("removed tag '{removed}' at index {index}");
                self.notify();
                true
            }
            Err(rejection) => {
                debug!("remove ignored: {rejection}");
                false
            }
        }
    }

    /// Remove the final tag
    ///
    /// Only acts while the pending entry is empty, mirroring a delete key
    /// pressed in an empty field.
    pub fn remove_last_tag(&mut self) -> bool {
        if !self.pending.is_empty() {
            debug!("remove last ignored: {}", Rejection::PendingNotEmpty);
            return false;
        }
        match self.tags.len().checked_sub(1) {
            Some(last) => self.remove(last),
            None => false,
        }
    }

    /// Feed each candidate through [`add_new`](Self::add_new)
    ///
    /// Returns the candidates that were rejected, in order. A rejected
    /// candidate stays pending until the next one replaces it.
    pub fn add_candidates<I, S>(&mut self, candidates: I) -> Vec<String>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut rejected = Vec::new();
        for candidate in candidates {
            let candidate = candidate.into();
            self.set_pending(candidate.clone());
            if !self.add_new() {
                rejected.push(candidate);
            }
        }
        rejected
    }

    fn accept_candidate(&self) -> Result<String, Rejection> {
        if self.options.read_only {
            return Err(Rejection::ReadOnly);
        }

        let trimmed = self.pending.trim();
        if trimmed.is_empty() {
            return Err(Rejection::Empty);
        }

        let candidate = match &self.options.before_adding {
            Some(hook) => {
                let rewritten = hook(trimmed).ok_or(Rejection::Vetoed)?;
                let rewritten = rewritten.trim();
                if rewritten.is_empty() {
                    return Err(Rejection::Empty);
                }
                rewritten.to_string()
            }
            None => trimmed.to_string(),
        };

        if !self.options.validator.accepts(&candidate) {
            return Err(Rejection::Invalid {
                rule: self.options.validator.to_string(),
                candidate,
            });
        }

        if !self.options.allow_duplicates && self.tags.contains(&candidate) {
            return Err(Rejection::Duplicate(candidate));
        }

        if let Some(limit) = self.options.limit
            && self.tags.len() >= limit
        {
            return Err(Rejection::LimitReached(limit));
        }

        Ok(candidate)
    }

    fn notify(&mut self) {
        let event = TagsChanged { tags: self.tags.clone() };
        self.listeners.emit(&event);
    }
}

impl Default for TagInput {
    fn default() -> Self {
        Self::new(TagInputOptions::default())
    }
}

impl fmt::Debug for TagInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TagInput")
            .field("tags", &self.tags)
            .field("pending", &self.pending)
            .field("options", &self.options)
            .field("listeners", &self.listeners)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::{ValidationMode, Validator};
    use std::cell::RefCell;
    use std::rc::Rc;

    fn add(input: &mut TagInput, tag: &str) -> bool {
        input.set_pending(tag);
        input.add_new()
    }

    /// Attach a listener that records every payload
    fn record(input: &mut TagInput) -> Rc<RefCell<Vec<Vec<String>>>> {
        let log = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&log);
        input.on_change(move |event| sink.borrow_mut().push(event.tags.clone()));
        log
    }

    #[test]
    fn test_add_new_filters_duplicates() {
        let mut input = TagInput::default();
        let events = record(&mut input);

        assert!(add(&mut input, "tag 1"));
        assert!(!add(&mut input, "tag 1"));
        assert!(add(&mut input, "tag 2"));

        assert_eq!(input.tags(), ["tag 1", "tag 2"]);
        assert_eq!(input.pending(), "");
        assert_eq!(events.borrow().len(), 2);
        assert_eq!(events.borrow().last().unwrap(), input.tags());
    }

    #[test]
    fn test_duplicate_rejection_keeps_pending() {
        let mut input = TagInput::with_tags(TagInputOptions::new(), ["a"]);
        assert!(!add(&mut input, "a"));
        assert_eq!(input.pending(), "a");
    }

    #[test]
    fn test_duplicates_are_case_sensitive() {
        let mut input = TagInput::default();
        assert!(add(&mut input, "Rust"));
        assert!(add(&mut input, "rust"));
        assert_eq!(input.len(), 2);
    }

    #[test]
    fn test_allow_duplicates() {
        let mut input = TagInput::new(TagInputOptions::new().with_allow_duplicates(true));
        for _ in 0..3 {
            assert!(add(&mut input, "tag 1"));
        }
        assert_eq!(input.tags(), ["tag 1", "tag 1", "tag 1"]);
    }

    #[test]
    fn test_candidate_is_trimmed() {
        let mut input = TagInput::default();
        assert!(add(&mut input, "  spaced  "));
        assert!(!add(&mut input, "spaced"));
        assert_eq!(input.tags(), ["spaced"]);
    }

    #[test]
    fn test_blank_candidates_ignored() {
        let mut input = TagInput::default();
        let events = record(&mut input);
        assert!(!add(&mut input, ""));
        assert!(!add(&mut input, " \t "));
        assert!(input.is_empty());
        assert_eq!(input.pending(), " \t ");
        assert!(events.borrow().is_empty());
    }

    #[test]
    fn test_failed_validation_keeps_pending_and_is_silent() {
        let mut input = TagInput::new(TagInputOptions::new().with_validation(ValidationMode::Email));
        let events = record(&mut input);
        assert!(!add(&mut input, "not an email"));
        assert_eq!(input.pending(), "not an email");
        assert!(input.is_empty());
        assert!(events.borrow().is_empty());
    }

    #[test]
    fn test_remove_preserves_order() {
        for index in 0..4 {
            let mut input = TagInput::with_tags(TagInputOptions::new(), ["a", "b", "c", "d"]);
            let events = record(&mut input);
            assert!(input.remove(index));

            let mut expected = vec!["a", "b", "c", "d"];
            expected.remove(index);
            assert_eq!(input.tags(), expected.as_slice());
            assert_eq!(events.borrow().len(), 1);
        }
    }

    #[test]
    fn test_remove_out_of_range_is_noop() {
        let mut input = TagInput::with_tags(TagInputOptions::new(), ["a"]);
        let events = record(&mut input);
        assert!(!input.remove(1));
        assert!(!input.remove(usize::MAX));
        assert_eq!(input.tags(), ["a"]);
        assert!(events.borrow().is_empty());
    }

    #[test]
    fn test_remove_last_tag() {
        let mut input = TagInput::with_tags(TagInputOptions::new(), ["tag 1", "tag 2", "tag 3"]);
        let events = record(&mut input);
        assert!(input.remove_last_tag());
        assert_eq!(input.tags(), ["tag 1", "tag 2"]);
        assert_eq!(*events.borrow(), vec![vec!["tag 1".to_string(), "tag 2".to_string()]]);
    }

    #[test]
    fn test_remove_last_tag_on_empty_list() {
        let mut input = TagInput::default();
        let events = record(&mut input);
        assert!(!input.remove_last_tag());
        assert!(events.borrow().is_empty());
    }

    #[test]
    fn test_remove_last_tag_requires_empty_pending() {
        let mut input = TagInput::with_tags(TagInputOptions::new(), ["a"]);
        input.set_pending("b");
        assert!(!input.remove_last_tag());
        assert_eq!(input.tags(), ["a"]);
    }

    #[test]
    fn test_read_only_blocks_all_mutation() {
        let mut input = TagInput::with_tags(TagInputOptions::new().with_read_only(true), ["a", "b"]);
        let events = record(&mut input);
        assert!(!add(&mut input, "c"));
        assert!(!input.remove(0));
        assert!(!input.remove_last_tag());
        assert_eq!(input.tags(), ["a", "b"]);
        assert!(events.borrow().is_empty());
    }

    #[test]
    fn test_numeric_seed_is_coerced() {
        let input = TagInput::with_tags(TagInputOptions::new(), [1, 2, 3]);
        assert_eq!(input.tags(), ["1", "2", "3"]);
    }

    #[test]
    fn test_seed_is_trusted() {
        let options = TagInputOptions::new().with_validation(ValidationMode::Digits).with_limit(Some(1));
        let input = TagInput::with_tags(options, ["x", "x", "y"]);
        assert_eq!(input.tags(), ["x", "x", "y"]);
    }

    #[test]
    fn test_limit_stops_growth() {
        let mut input = TagInput::new(TagInputOptions::new().with_limit(Some(2)));
        let events = record(&mut input);
        assert!(add(&mut input, "a"));
        assert!(add(&mut input, "b"));
        assert!(input.is_full());
        assert!(!add(&mut input, "c"));
        assert_eq!(input.pending(), "c");
        assert_eq!(events.borrow().len(), 2);

        assert!(input.remove(0));
        input.clear_pending();
        assert!(add(&mut input, "c"));
        assert_eq!(input.tags(), ["b", "c"]);
    }

    #[test]
    fn test_before_adding_rewrites_and_vetoes() {
        let options = TagInputOptions::new().with_before_adding(|candidate| {
            (!candidate.starts_with('!')).then(|| candidate.to_lowercase())
        });
        let mut input = TagInput::new(options);
        assert!(add(&mut input, "Rust"));
        assert!(!add(&mut input, "RUST"));
        assert!(!add(&mut input, "!skip"));
        assert_eq!(input.tags(), ["rust"]);
    }

    #[test]
    fn test_before_adding_runs_before_validation() {
        let options = TagInputOptions::new()
            .with_validation(ValidationMode::Digits)
            .with_before_adding(|candidate| Some(candidate.replace('-', "")));
        let mut input = TagInput::new(options);
        assert!(add(&mut input, "12-34"));
        assert_eq!(input.tags(), ["1234"]);
    }

    #[test]
    fn test_custom_validator() {
        let options = TagInputOptions::new().with_validator(Validator::custom(|s| s.starts_with('#')));
        let mut input = TagInput::new(options);
        assert!(!add(&mut input, "rust"));
        assert!(add(&mut input, "#rust"));
        assert_eq!(input.tags(), ["#rust"]);
    }

    #[test]
    fn test_add_candidates_reports_rejected() {
        let mut input = TagInput::new(TagInputOptions::new().with_validation(ValidationMode::Digits));
        let events = record(&mut input);
        let rejected = input.add_candidates(["mati@tucci.me", "https://tucci.me", "123", "2002-04-03", "foo"]);
        assert_eq!(rejected, ["mati@tucci.me", "https://tucci.me", "2002-04-03", "foo"]);
        assert_eq!(input.tags(), ["123"]);
        assert_eq!(input.pending(), "foo");
        assert_eq!(events.borrow().len(), 1);
    }
}
