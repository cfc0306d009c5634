//! The per-language translation table.
//!
//! The bundled defaults are embedded at compile time from `en.json` and
//! `es.json`. A deployment can point `TRANSLATIONS_DIR` at a directory with
//! the same two files to replace them without rebuilding.

use std::path::{Path, PathBuf};

use serde::Serialize;
use serde_json::Value;
use thiserror::Error;

use super::language::Language;
use super::tree::{LanguageTree, TreeError};

const EMBEDDED_EN: &str = include_str!("en.json");
const EMBEDDED_ES: &str = include_str!("es.json");

/// Errors raised while loading a translation table.
#[derive(Debug, Error)]
pub enum TableError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid JSON in {language} translations: {source}")]
    Json {
        language: Language,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid {language} translations: {source}")]
    Shape {
        language: Language,
        #[source]
        source: TreeError,
    },
}

/// One tree per supported language.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Translations {
    pub en: LanguageTree,
    pub es: LanguageTree,
}

impl Translations {
    /// The defaults compiled into the binary.
    pub fn embedded() -> Result<Self, TableError> {
        Self::from_json_str(EMBEDDED_EN, EMBEDDED_ES)
    }

    /// Load `en.json` and `es.json` from a directory.
    pub fn load_dir(dir: &Path) -> Result<Self, TableError> {
        let en = read_file(&dir.join("en.json"))?;
        let es = read_file(&dir.join("es.json"))?;
        Self::from_json_str(&en, &es)
    }

    pub fn from_json_str(en: &str, es: &str) -> Result<Self, TableError> {
        Ok(Self {
            en: parse_tree(Language::En, en)?,
            es: parse_tree(Language::Es, es)?,
        })
    }

    pub fn get(&self, language: Language) -> &LanguageTree {
        match language {
            Language::En => &self.en,
            Language::Es => &self.es,
        }
    }

    pub fn get_mut(&mut self, language: Language) -> &mut LanguageTree {
        match language {
            Language::En => &mut self.en,
            Language::Es => &mut self.es,
        }
    }
}

fn read_file(path: &Path) -> Result<String, TableError> {
    std::fs::read_to_string(path).map_err(|source| TableError::Io {
        path: path.to_path_buf(),
        source,
    })
}

fn parse_tree(language: Language, raw: &str) -> Result<LanguageTree, TableError> {
    let value: Value =
        serde_json::from_str(raw).map_err(|source| TableError::Json { language, source })?;
    LanguageTree::from_json(&value).map_err(|source| TableError::Shape { language, source })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_defaults_load() {
        let table = Translations::embedded().unwrap();
        assert_eq!(table.en.get_nested("hero.title"), Some("Welcome"));
        assert_eq!(table.es.get_nested("hero.title"), Some("Bienvenido"));
    }

    #[test]
    fn test_embedded_spanish_covers_every_english_key() {
        let table = Translations::embedded().unwrap();
        for entry in table.en.flatten() {
            let path = format!("{}.{}", entry.section, entry.key);
            assert!(table.es.get_nested(&path).is_some(), "missing es value for {path}");
        }
    }

    #[test]
    fn test_load_dir_reads_both_files() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("en.json"), r#"{"nav":{"home":"Home"}}"#).unwrap();
        std::fs::write(dir.path().join("es.json"), r#"{"nav":{"home":"Inicio"}}"#).unwrap();

        let table = Translations::load_dir(dir.path()).unwrap();
        assert_eq!(table.get(Language::Es).get_nested("nav.home"), Some("Inicio"));
    }

    #[test]
    fn test_load_dir_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = Translations::load_dir(dir.path()).unwrap_err();
        assert!(matches!(err, TableError::Io { .. }));
    }

    #[test]
    fn test_shape_errors_name_the_language() {
        let err = Translations::from_json_str(r#"{"a":{"b":"c"}}"#, r#"{"a":{"list":[1]}}"#)
            .unwrap_err();
        assert!(matches!(err, TableError::Shape { language: Language::Es, .. }));
        assert!(err.to_string().contains("a.list"));
    }
}
