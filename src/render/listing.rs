//! Plain listing: a banner, then a signature line and a description line
//! per function.

use crate::model::*;
use crate::render::Renderer;

pub struct ListingRenderer;

impl Renderer for ListingRenderer {
    fn render(&self, doc: &Document) -> String {
        let mut out = format!("Functions in {}:\n", doc.source);
        for func in &doc.functions {
            match func.class {
                Classification::Private => {
                    out.push_str(&format!("Signature (private): {}\n", func.signature))
                }
                _ => out.push_str(&format!("Signature: {}\n", func.signature)),
            }
            // description carries its own trailing newline unless empty
            out.push_str("Description: ");
            out.push_str(&func.description);
            if func.description.is_empty() {
                out.push('\n');
            }
        }
        out
    }
}
