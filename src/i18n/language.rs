//! Supported site languages.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A language the site is published in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Es,
}

/// Returned when a string is not one of the supported language codes.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("unsupported language code: {0:?}")]
pub struct UnknownLanguage(pub String);

impl Language {
    /// Every supported language, English first.
    pub const ALL: [Language; 2] = [Language::En, Language::Es];

    /// Two-letter code as stored and sent over the wire.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Es => "es",
        }
    }

    /// Parse a stored value. Only the exact codes `en` and `es` are accepted.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "en" => Some(Self::En),
            "es" => Some(Self::Es),
            _ => None,
        }
    }

    /// Pick a language from a locale hint such as `es-MX` or `en-US,en;q=0.9`.
    ///
    /// Anything that does not start with `es` maps to English.
    pub fn from_locale_hint(hint: &str) -> Self {
        if hint.trim_start().to_lowercase().starts_with("es") {
            Self::Es
        } else {
            Self::En
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Language {
    type Err = UnknownLanguage;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| UnknownLanguage(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[test]
    fn test_parse_exact_codes_only() {
        assert_eq!(Language::parse("en"), Some(Language::En));
        assert_eq!(Language::parse("es"), Some(Language::Es));
        assert_eq!(Language::parse("fr"), None);
        assert_eq!(Language::parse("ES"), None);
        assert_eq!(Language::parse(""), None);
    }

    #[rstest]
    #[case("es", Language::Es)]
    #[case("es-MX", Language::Es)]
    #[case("ES-es,es;q=0.9", Language::Es)]
    #[case("en-US", Language::En)]
    #[case("fr-FR", Language::En)]
    #[case("", Language::En)]
    fn test_from_locale_hint(#[case] hint: &str, #[case] expected: Language) {
        assert_eq!(Language::from_locale_hint(hint), expected);
    }

    #[test]
    fn test_from_str_reports_unknown_code() {
        let err = "de".parse::<Language>().unwrap_err();
        assert_eq!(err, UnknownLanguage("de".to_string()));
    }

    #[test]
    fn test_serde_uses_lowercase_codes() {
        assert_eq!(serde_json::to_string(&Language::Es).unwrap(), "\"es\"");
        let lang: Language = serde_json::from_str("\"en\"").unwrap();
        assert_eq!(lang, Language::En);
    }
}
