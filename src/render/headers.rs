//! Bare `pub fn ... {` headers, no descriptions.

use crate::model::*;
use crate::render::Renderer;

pub struct HeadersRenderer;

impl Renderer for HeadersRenderer {
    fn render(&self, doc: &Document) -> String {
        doc.functions
            .iter()
            .map(|f| format!("{}\n", f.header))
            .collect()
    }
}
