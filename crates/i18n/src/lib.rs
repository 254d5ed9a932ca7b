//! Interface language selection, translation tables and the persisted
//! language preference.

pub mod dictionary;
pub mod store;

pub use dictionary::*;
pub use store::*;

use serde::{Deserialize, Serialize};

/// Storage key holding the chosen language code.
pub const LANGUAGE_KEY: &str = "site_lang";

#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    It,
    En,
}

impl Language {
    /// Parse an exact stored code. Anything else is rejected.
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "it" => Some(Language::It),
            "en" => Some(Language::En),
            _ => None,
        }
    }

    pub fn code(self) -> &'static str {
        match self {
            Language::It => "it",
            Language::En => "en",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Language::It => Language::En,
            Language::En => Language::It,
        }
    }

    /// Pick the startup language: a valid saved preference wins, otherwise
    /// English only when the document declares it, otherwise Italian.
    pub fn resolve(saved: Option<&str>, document_lang: &str) -> Self {
        if let Some(lang) = saved.and_then(Language::from_code) {
            return lang;
        }
        let prefix: String = document_lang
            .chars()
            .take(2)
            .collect::<String>()
            .to_ascii_lowercase();
        if prefix == "en" {
            Language::En
        } else {
            Language::It
        }
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::Language;

    #[test]
    fn saved_preference_wins() {
        assert_eq!(Language::resolve(Some("en"), "it"), Language::En);
        assert_eq!(Language::resolve(Some("it"), "en-US"), Language::It);
    }

    #[test]
    fn invalid_saved_value_falls_back_to_document() {
        assert_eq!(Language::resolve(Some("fr"), "EN-gb"), Language::En);
        assert_eq!(Language::resolve(Some("EN"), ""), Language::It);
        assert_eq!(Language::resolve(None, "de"), Language::It);
    }

    #[test]
    fn toggle_round_trips() {
        for lang in [Language::It, Language::En] {
            assert_eq!(lang.toggled().toggled(), lang);
            assert_ne!(lang.toggled(), lang);
        }
    }

    #[test]
    fn serde_uses_codes() {
        assert_eq!(serde_json::to_string(&Language::En).unwrap(), "\"en\"");
        let lang: Language = serde_json::from_str("\"it\"").unwrap();
        assert_eq!(lang, Language::It);
    }
}
