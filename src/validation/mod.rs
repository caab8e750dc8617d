//! Candidate validation
//!
//! A candidate must pass the configured [`Validator`] before it becomes a tag.
//! The built-in shapes are selected by [`ValidationMode`]; callers can also
//! supply their own regex or predicate.

use std::fmt;
use std::str::FromStr;
use std::sync::{Arc, LazyLock};

use clap::ValueEnum;
use regex::{Regex, RegexBuilder};
use serde::{Deserialize, Serialize};

use crate::TagInputError;

static DIGITS: LazyLock<Regex> = LazyLock::new(|| compile(r"^[0-9]+$", false));

static EMAIL: LazyLock<Regex> = LazyLock::new(|| {
    compile(
        r#"^(([^<>()\[\]\\.,;:\s@"]+(\.[^<>()\[\]\\.,;:\s@"]+)*)|(".+"))@((\[[0-9]{1,3}\.[0-9]{1,3}\.[0-9]{1,3}\.[0-9]{1,3}\])|(([a-zA-Z\-0-9]+\.)+[a-zA-Z]{2,}))$"#,
        false,
    )
});

static URL: LazyLock<Regex> = LazyLock::new(|| {
    compile(
        r"^(https?|ftp|rtmp|mms)://([a-z0-9][a-z0-9_-]*)(\.[a-z0-9][a-z0-9_-]*)+(:[0-9]+)?(/\S*)?$",
        true,
    )
});

static ISODATE: LazyLock<Regex> = LazyLock::new(|| {
    compile(
        r"^[0-9]{4}[/-](0?[1-9]|1[012])[/-](0?[1-9]|[12][0-9]|3[01])$",
        false,
    )
});

// Built-in patterns are constants, covered by `test_builtin_patterns_compile`.
fn compile(pattern: &str, case_insensitive: bool) -> Regex {
    RegexBuilder::new(pattern)
        .case_insensitive(case_insensitive)
        .build()
        .expect("built-in validation pattern must compile")
}

/// Built-in validation shapes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ValidationMode {
    /// Accept every candidate
    #[default]
    None,
    /// Plain text: none of the more specific shapes apply
    Text,
    /// Decimal digits only
    Digits,
    /// `local@domain.tld`
    Email,
    /// `scheme://host[.tld][:port][/path]`
    Url,
    /// `YYYY-MM-DD`
    #[value(name = "isodate")]
    IsoDate,
}

impl ValidationMode {
    /// Every mode, in declaration order
    pub const ALL: [Self; 6] = [
        Self::None,
        Self::Text,
        Self::Digits,
        Self::Email,
        Self::Url,
        Self::IsoDate,
    ];

    /// The lowercase name used in config files and on the command line
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Text => "text",
            Self::Digits => "digits",
            Self::Email => "email",
            Self::Url => "url",
            Self::IsoDate => "isodate",
        }
    }

    /// Check a trimmed candidate against this mode
    #[must_use]
    pub fn matches(self, candidate: &str) -> bool {
        match self {
            Self::None => true,
            Self::Digits => DIGITS.is_match(candidate),
            Self::Email => EMAIL.is_match(candidate),
            Self::Url => URL.is_match(candidate),
            Self::IsoDate => ISODATE.is_match(candidate),
            Self::Text => ![Self::Digits, Self::Email, Self::Url, Self::IsoDate]
                .iter()
                .any(|mode| mode.matches(candidate)),
        }
    }

    /// All modes (excluding `none`) that accept the candidate
    #[must_use]
    pub fn accepting(candidate: &str) -> Vec<Self> {
        Self::ALL
            .into_iter()
            .filter(|mode| *mode != Self::None && mode.matches(candidate))
            .collect()
    }
}

impl fmt::Display for ValidationMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ValidationMode {
    type Err = TagInputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|mode| mode.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| TagInputError::UnknownValidation(s.to_string()))
    }
}

/// Predicate type for [`Validator::Custom`]
pub type Predicate = Arc<dyn Fn(&str) -> bool + Send + Sync>;

/// The rule a candidate must satisfy to be accepted
#[derive(Clone)]
pub enum Validator {
    /// One of the built-in shapes
    Mode(ValidationMode),
    /// A user supplied regular expression
    Pattern(Regex),
    /// An arbitrary predicate
    Custom(Predicate),
}

impl Validator {
    /// Build a validator from a regex source string.
    ///
    /// # Errors
    /// Returns `TagInputError::InvalidPattern` if the regex fails to compile.
    pub fn pattern(source: &str) -> Result<Self, TagInputError> {
        Regex::new(source)
            .map(Self::Pattern)
            .map_err(|e| TagInputError::InvalidPattern {
                pattern: source.to_string(),
                reason: e.to_string(),
            })
    }

    /// Wrap a predicate
    pub fn custom<F>(predicate: F) -> Self
    where
        F: Fn(&str) -> bool + Send + Sync + 'static,
    {
        Self::Custom(Arc::new(predicate))
    }

    /// Check a trimmed candidate
    #[must_use]
    pub fn accepts(&self, candidate: &str) -> bool {
        match self {
            Self::Mode(mode) => mode.matches(candidate),
            Self::Pattern(re) => re.is_match(candidate),
            Self::Custom(predicate) => predicate(candidate),
        }
    }

    /// Whether this validator lets everything through
    #[must_use]
    pub const fn is_permissive(&self) -> bool {
        matches!(self, Self::Mode(ValidationMode::None))
    }
}

impl Default for Validator {
    fn default() -> Self {
        Self::Mode(ValidationMode::None)
    }
}

impl From<ValidationMode> for Validator {
    fn from(mode: ValidationMode) -> Self {
        Self::Mode(mode)
    }
}

impl fmt::Debug for Validator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Mode(mode) => f.debug_tuple("Mode").field(mode).finish(),
            Self::Pattern(re) => f.debug_tuple("Pattern").field(&re.as_str()).finish(),
            Self::Custom(_) => f.write_str("Custom(..)"),
        }
    }
}

impl fmt::Display for Validator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Mode(mode) => write!(f, "{mode}"),
            Self::Pattern(re) => write!(f, "pattern /{}/", re.as_str()),
            Self::Custom(_) => f.write_str("custom"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLES: [&str; 5] = ["123", "mati@tucci.me", "https://tucci.me", "2002-04-03", "foo"];

    fn accepted(mode: ValidationMode) -> Vec<&'static str> {
        SAMPLES.into_iter().filter(|s| mode.matches(s)).collect()
    }

    #[test]
    fn test_builtin_patterns_compile() {
        assert!(DIGITS.is_match("1"));
        assert!(EMAIL.is_match("a@b.cd"));
        assert!(URL.is_match("http://a.b"));
        assert!(ISODATE.is_match("2020-01-01"));
    }

    #[test]
    fn test_each_mode_accepts_only_its_shape() {
        assert_eq!(accepted(ValidationMode::Digits), vec!["123"]);
        assert_eq!(accepted(ValidationMode::Email), vec!["mati@tucci.me"]);
        assert_eq!(accepted(ValidationMode::Url), vec!["https://tucci.me"]);
        assert_eq!(accepted(ValidationMode::IsoDate), vec!["2002-04-03"]);
        assert_eq!(accepted(ValidationMode::Text), vec!["foo"]);
        assert_eq!(accepted(ValidationMode::None), SAMPLES.to_vec());
    }

    #[test]
    fn test_digits_rejects_mixed() {
        assert!(!ValidationMode::Digits.matches("12a"));
        assert!(!ValidationMode::Digits.matches(""));
        assert!(!ValidationMode::Digits.matches("١٢٣"));
    }

    #[test]
    fn test_url_variants() {
        assert!(ValidationMode::Url.matches("HTTP://Example.COM:8080/path?q=1"));
        assert!(ValidationMode::Url.matches("ftp://files.example.org"));
        assert!(!ValidationMode::Url.matches("https://localhost"));
        assert!(!ValidationMode::Url.matches("tucci.me"));
    }

    #[test]
    fn test_isodate_ranges() {
        assert!(ValidationMode::IsoDate.matches("2002/4/3"));
        assert!(!ValidationMode::IsoDate.matches("2002-13-01"));
        assert!(!ValidationMode::IsoDate.matches("2002-01-32"));
        assert!(!ValidationMode::IsoDate.matches("02-01-01"));
    }

    #[test]
    fn test_text_allows_spaces_and_symbols() {
        assert!(ValidationMode::Text.matches("tag 1"));
        assert!(ValidationMode::Text.matches("c++"));
    }

    #[test]
    fn test_from_str() {
        assert_eq!("isodate".parse::<ValidationMode>().unwrap(), ValidationMode::IsoDate);
        assert_eq!(" EMAIL ".parse::<ValidationMode>().unwrap(), ValidationMode::Email);
        assert!("phone".parse::<ValidationMode>().is_err());
    }

    #[test]
    fn test_accepting_lists_matching_modes() {
        assert_eq!(ValidationMode::accepting("123"), vec![ValidationMode::Digits]);
        assert_eq!(ValidationMode::accepting("foo"), vec![ValidationMode::Text]);
    }

    #[test]
    fn test_custom_validators() {
        let pattern = Validator::pattern(r"^#[a-z]+$").unwrap();
        assert!(pattern.accepts("#rust"));
        assert!(!pattern.accepts("rust"));

        let short = Validator::custom(|s| s.len() <= 3);
        assert!(short.accepts("abc"));
        assert!(!short.accepts("abcd"));

        assert!(Validator::pattern("(").is_err());
        assert!(Validator::default().is_permissive());
    }
}
