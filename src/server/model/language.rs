//! Request language selection and bilingual field resolution.

use axum::http::{header::ACCEPT_LANGUAGE, HeaderMap};

/// Custom header some clients send instead of `Accept-Language`.
pub const LANG_HEADER: &str = "x-lang";

/// Language a response is rendered in. French is the base language of every
/// bilingual field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Language {
    #[default]
    Fr,
    En,
}

impl Language {
    /// Picks the language from request headers.
    ///
    /// `Accept-Language` wins over `x-lang` when both are present. Only the
    /// primary subtag of the first listed tag is considered, so `en-US,fr;q=0.8`
    /// selects English and `fr-FR,en` selects French.
    pub fn from_headers(headers: &HeaderMap) -> Self {
        headers
            .get(ACCEPT_LANGUAGE)
            .or_else(|| headers.get(LANG_HEADER))
            .and_then(|value| value.to_str().ok())
            .map(Self::from_tag_list)
            .unwrap_or_default()
    }

    /// Parses a comma separated language tag list such as `en-GB;q=0.9,fr`.
    pub fn from_tag_list(value: &str) -> Self {
        let primary = value
            .split(',')
            .next()
            .and_then(|tag| tag.split(';').next())
            .map(str::trim)
            .and_then(|tag| tag.split(['-', '_']).next())
            .unwrap_or_default();

        if primary.eq_ignore_ascii_case("en") {
            Language::En
        } else {
            Language::Fr
        }
    }

    /// Resolves a bilingual field.
    ///
    /// Returns the English variant only for English requests and only when it
    /// is present and non-blank; otherwise the base field.
    pub fn pick<'a>(self, base: &'a str, en: Option<&'a str>) -> &'a str {
        match (self, en) {
            (Language::En, Some(en)) if !en.trim().is_empty() => en,
            _ => base,
        }
    }

    /// Same as [`Language::pick`] for optional base fields such as card content.
    pub fn pick_opt(self, base: Option<&str>, en: Option<&str>) -> Option<String> {
        match (self, en) {
            (Language::En, Some(en)) if !en.trim().is_empty() => Some(en.to_string()),
            _ => base.map(str::to_string),
        }
    }
}
