//! Raw candidate blocks followed by the list of descriptions.

use crate::model::*;
use crate::render::Renderer;

pub struct BlocksRenderer;

impl Renderer for BlocksRenderer {
    fn render(&self, doc: &Document) -> String {
        let mut out = String::new();
        for func in &doc.functions {
            out.push_str(&func.block);
            out.push('\n');
        }
        let descriptions: Vec<&str> = doc.functions.iter().map(|f| f.description.as_str()).collect();
        out.push_str(&format!("{:?}\n", descriptions));
        out
    }
}
