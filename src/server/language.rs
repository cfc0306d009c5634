//! Language selection for public reads.

use axum::http::HeaderMap;
use axum::http::header::ACCEPT_LANGUAGE;

use crate::i18n::{Language, LanguagePreference, MemoryStore, STORAGE_KEY};

use super::cookies::cookie_value;

/// Language for a request: a valid `lang` parameter first, then the
/// visitor's stored preference cookie, then `Accept-Language`.
pub fn request_language(explicit: Option<&str>, headers: &HeaderMap) -> Language {
    if let Some(language) = explicit.and_then(Language::parse) {
        return language;
    }

    let store = match cookie_value(headers, STORAGE_KEY) {
        Some(stored) => MemoryStore::with_value(stored),
        None => MemoryStore::default(),
    };
    let hint = headers
        .get(ACCEPT_LANGUAGE)
        .and_then(|value| value.to_str().ok());

    LanguagePreference::new(store).default_language(hint)
}

#[cfg(test)]
mod tests {
    use axum::http::HeaderValue;
    use axum::http::header::COOKIE;
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case(Some("es"), None, None, Language::Es)]
    #[case(Some("fr"), Some("multiedge-lang=es"), None, Language::Es)]
    #[case(None, Some("multiedge-lang=en"), Some("es-MX"), Language::En)]
    #[case(None, Some("multiedge-lang=fr"), Some("es-MX"), Language::Es)]
    #[case(None, None, Some("es-MX,es;q=0.9"), Language::Es)]
    #[case(None, None, Some("en-GB"), Language::En)]
    #[case(None, None, None, Language::En)]
    fn test_request_language(
        #[case] explicit: Option<&str>,
        #[case] cookie: Option<&'static str>,
        #[case] accept: Option<&'static str>,
        #[case] expected: Language,
    ) {
        let mut headers = HeaderMap::new();
        if let Some(cookie) = cookie {
            headers.insert(COOKIE, HeaderValue::from_static(cookie));
        }
        if let Some(accept) = accept {
            headers.insert(ACCEPT_LANGUAGE, HeaderValue::from_static(accept));
        }

        assert_eq!(request_language(explicit, &headers), expected);
    }
}
