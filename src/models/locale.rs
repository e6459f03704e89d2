//! Locale selection and bilingual display text.
//!
//! Computations never look at a [`Locale`]; names are carried through as
//! [`LocalizedText`] and resolved once when a response is built.

use serde::{Deserialize, Serialize};

/// A supported display language.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Locale {
    /// Arabic.
    Ar,
    /// English.
    #[default]
    En,
}

/// A display string available in Arabic and English.
///
/// # Example
///
/// ```
/// use housing_engine::models::{Locale, LocalizedText};
///
/// let name = LocalizedText::new("الموارد البشرية", "Human Resources");
/// assert_eq!(name.resolve(Locale::En), "Human Resources");
/// assert_eq!(name.resolve(Locale::Ar), "الموارد البشرية");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocalizedText {
    /// Arabic text.
    pub ar: String,
    /// English text.
    pub en: String,
}

impl LocalizedText {
    /// Creates a new bilingual string.
    pub fn new(ar: impl Into<String>, en: impl Into<String>) -> Self {
        Self {
            ar: ar.into(),
            en: en.into(),
        }
    }

    /// Returns the text for the given locale.
    ///
    /// Falls back to the other language when the requested one is blank.
    pub fn resolve(&self, locale: Locale) -> &str {
        let (preferred, fallback) = match locale {
            Locale::Ar => (&self.ar, &self.en),
            Locale::En => (&self.en, &self.ar),
        };
        if preferred.trim().is_empty() {
            fallback
        } else {
            preferred
        }
    }
}
