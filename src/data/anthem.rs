//! Anthem lyrics, parsed once from the JSON embedded at build time.

use std::sync::OnceLock;

use serde::Deserialize;

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Anthem {
    pub id: String,
    pub title: String,
    pub sections: Vec<Section>,
    pub author: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Section {
    pub kind: SectionKind,
    #[serde(default)]
    pub label: Option<String>,
    pub lines: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SectionKind {
    Stanza,
    Chorus,
}

static ANTHEMS: OnceLock<Vec<Anthem>> = OnceLock::new();

pub fn all() -> &'static [Anthem] {
    ANTHEMS.get_or_init(|| {
        serde_json::from_str(include_str!("../../content/anthems.json"))
            .expect("embedded anthem data is valid JSON")
    })
}

pub fn by_id(id: &str) -> Option<&'static Anthem> {
    all().iter().find(|a| a.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_data_parses() {
        let anthems = all();
        assert_eq!(anthems.len(), 2);
        assert!(anthems.iter().all(|a| !a.sections.is_empty()));
        assert!(anthems.iter().all(|a| !a.author.is_empty()));
    }

    #[test]
    fn sections_keep_document_order() {
        let anthem = by_id("colegio").unwrap();
        assert_eq!(anthem.sections[0].kind, SectionKind::Stanza);
        assert_eq!(anthem.sections[1].kind, SectionKind::Chorus);
        assert_eq!(anthem.sections[1].label.as_deref(), Some("Coro"));
    }

    #[test]
    fn unknown_id_yields_none() {
        assert!(by_id("himno-nacional").is_none());
    }
}
