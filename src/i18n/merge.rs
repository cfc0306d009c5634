//! Applying stored overrides on top of the bundled defaults.

use crate::database::ContentRow;

use super::language::Language;
use super::table::Translations;

/// Copy `defaults` and write every non-empty override value into it.
///
/// Each language is handled independently: a row with an English value and
/// an empty Spanish value only changes the English tree. Keys never
/// disappear; only leaves named by a row are overwritten.
pub fn merge(defaults: &Translations, rows: &[ContentRow]) -> Translations {
    let mut merged = defaults.clone();

    for row in rows {
        let path = row.path();
        for language in Language::ALL {
            if let Some(value) = override_value(row, language) {
                merged.get_mut(language).set_nested(&path, value);
            }
        }
    }

    merged
}

fn override_value(row: &ContentRow, language: Language) -> Option<&str> {
    let value = match language {
        Language::En => row.en.as_deref(),
        Language::Es => row.es.as_deref(),
    };
    value.filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::resolve;

    fn defaults() -> Translations {
        Translations::from_json_str(
            r#"{"hero":{"title":"Welcome","cta":{"primary":"Start"}},"nav":{"home":"Home"}}"#,
            r#"{"hero":{"title":"Bienvenido","cta":{"primary":"Empezar"}},"nav":{"home":"Inicio"}}"#,
        )
        .unwrap()
    }

    fn row(section: &str, key: &str, en: &str, es: &str) -> ContentRow {
        ContentRow::new(section, key, Some(en.to_string()), Some(es.to_string()))
    }

    #[test]
    fn test_override_wins_per_language() {
        let merged = merge(&defaults(), &[row("hero", "title", "Hi", "")]);

        assert_eq!(resolve(&merged, "hero", "title", Language::En), "Hi");
        assert_eq!(resolve(&merged, "hero", "title", Language::Es), "Bienvenido");
    }

    #[test]
    fn test_nested_key_override() {
        let merged = merge(&defaults(), &[row("hero", "cta.primary", "Go", "Vamos")]);

        assert_eq!(merged.en.get_nested("hero.cta.primary"), Some("Go"));
        assert_eq!(merged.es.get_nested("hero.cta.primary"), Some("Vamos"));
    }

    #[test]
    fn test_does_not_touch_defaults() {
        let base = defaults();
        let _ = merge(&base, &[row("hero", "title", "Hi", "Hola")]);

        assert_eq!(base, defaults());
    }

    #[test]
    fn test_merge_is_idempotent() {
        let r = row("nav", "home", "Start", "Comienzo");
        let once = merge(&defaults(), std::slice::from_ref(&r));
        let twice = merge(&defaults(), &[r.clone(), r]);

        assert_eq!(once, twice);
    }

    #[test]
    fn test_empty_fields_equal_no_row() {
        let empty = ContentRow::new("hero", "title", Some(String::new()), None);
        assert_eq!(merge(&defaults(), &[empty]), defaults());
    }

    #[test]
    fn test_unknown_keys_are_added() {
        let merged = merge(&defaults(), &[row("promo", "banner", "Sale", "Oferta")]);

        assert_eq!(merged.en.get_nested("promo.banner"), Some("Sale"));
        assert_eq!(merged.en.get_nested("nav.home"), Some("Home"));
    }
}
