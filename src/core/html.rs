// src/core/html.rs
use scraper::{Html, Selector};

/// Text content of the first element whose `id` attribute equals `id`.
pub fn text_by_id(doc: &Html, id: &str) -> Option<String> {
    let any = Selector::parse("[id]").ok()?;
    doc.select(&any)
        .find(|el| el.value().id() == Some(id))
        .map(|el| el.text().collect())
}
