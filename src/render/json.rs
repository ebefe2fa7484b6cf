//! JSON renderer: structured output for tooling integration.
//!
//! Serializes the Document model directly as pretty-printed JSON.

use crate::model::*;
use crate::render::Renderer;

pub struct JsonRenderer;

impl Renderer for JsonRenderer {
    fn render(&self, doc: &Document) -> String {
        // Document holds only strings, integers and unit enums
        let mut out = serde_json::to_string_pretty(doc).expect("Document serializes");
        out.push('\n');
        out
    }
}
