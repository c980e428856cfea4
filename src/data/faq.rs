//! Canned questions and answers for the chat assistant.

use std::sync::OnceLock;

use serde::Deserialize;

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct FaqEntry {
    pub key: String,
    pub question: String,
    pub answer: String,
}

static ENTRIES: OnceLock<Vec<FaqEntry>> = OnceLock::new();

pub fn entries() -> &'static [FaqEntry] {
    ENTRIES.get_or_init(|| {
        serde_json::from_str(include_str!("../../content/faq.json"))
            .expect("embedded FAQ data is valid JSON")
    })
}

/// Canned answer for a question key. Options are statically bound to valid
/// keys, so an unknown key only shows up as an empty bot message.
pub fn answer_for(key: &str) -> &'static str {
    entries()
        .iter()
        .find(|e| e.key == key)
        .map(|e| e.answer.as_str())
        .unwrap_or("")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_entry_has_an_answer() {
        assert!(!entries().is_empty());
        for entry in entries() {
            assert!(!answer_for(&entry.key).is_empty(), "no answer for {}", entry.key);
        }
    }

    #[test]
    fn unknown_key_yields_empty_answer() {
        assert_eq!(answer_for("mensualidad-2019"), "");
    }
}
