//! Structural summary of a generated website
//!
//! [`summarize`] is a pure projection: it only reads the payload and never
//! invents content that is not in it. Missing optional sections simply
//! produce fewer lines.

use std::fmt;

use crate::payload::GenerationResult;

pub const HERO_LABEL: &str = "Главный экран";
pub const FEATURES_LABEL: &str = "Преимущества";
pub const ABOUT_LABEL: &str = "О компании";
pub const CONTACTS_LABEL: &str = "Контакты";

/// One line of the preview, in display order
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PreviewLine {
    /// Site title, empty when the payload has none
    Title(String),
    Description(String),
    /// Present when the payload has a hero section; carries its title if any
    Hero(Option<String>),
    /// Number of feature blocks
    Features(usize),
    About,
    Contacts,
}

impl PreviewLine {
    /// Section label for the structure entries, `None` for title and description
    pub fn label(&self) -> Option<&'static str> {
        match self {
            PreviewLine::Title(_) | PreviewLine::Description(_) => None,
            PreviewLine::Hero(_) => Some(HERO_LABEL),
            PreviewLine::Features(_) => Some(FEATURES_LABEL),
            PreviewLine::About => Some(ABOUT_LABEL),
            PreviewLine::Contacts => Some(CONTACTS_LABEL),
        }
    }

    /// Secondary text shown under or next to the label
    pub fn detail(&self) -> Option<String> {
        match self {
            PreviewLine::Title(text) | PreviewLine::Description(text) => Some(text.clone()),
            PreviewLine::Hero(title) => title.clone(),
            PreviewLine::Features(count) => Some(format!("{} блоков", count)),
            PreviewLine::About | PreviewLine::Contacts => None,
        }
    }
}

impl fmt::Display for PreviewLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.label(), self.detail()) {
            (Some(label), Some(detail)) => write!(f, "{}: {}", label, detail),
            (Some(label), None) => write!(f, "{}", label),
            (None, Some(detail)) => write!(f, "{}", detail),
            (None, None) => Ok(()),
        }
    }
}

/// Project a generated payload into its ordered summary lines
pub fn summarize(result: &GenerationResult) -> Vec<PreviewLine> {
    let mut lines = Vec::with_capacity(6);

    lines.push(PreviewLine::Title(result.title.clone().unwrap_or_default()));
    lines.push(PreviewLine::Description(
        result.description.clone().unwrap_or_default(),
    ));

    if let Some(hero) = &result.hero {
        lines.push(PreviewLine::Hero(hero.title.clone()));
    }

    if let Some(count) = result.feature_count() {
        lines.push(PreviewLine::Features(count));
    }

    if result.has_about() {
        lines.push(PreviewLine::About);
    }

    lines.push(PreviewLine::Contacts);
    lines
}
