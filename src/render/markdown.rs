//! GitHub-flavored markdown renderer.

use crate::model::*;
use crate::render::Renderer;
use crate::toc;

pub struct MarkdownRenderer;

impl Renderer for MarkdownRenderer {
    fn render(&self, doc: &Document) -> String {
        let mut output = format!("# {}\n\n", doc.source);

        if !doc.functions.is_empty() {
            let mut anchors = toc::Anchors::default();
            anchors.anchor(&doc.source);
            anchors.anchor("Index");
            output.push_str("## Index\n\n");
            for func in &doc.functions {
                let anchor = anchors.anchor(&func.name);
                output.push_str(&toc::render_toc_item(&func.name, &anchor));
                output.push('\n');
            }
            output.push('\n');
        }

        for func in &doc.functions {
            output.push_str(&render_function(func));
            output.push('\n');
        }

        output
    }
}

/// Render a single function's documentation block.
fn render_function(func: &FunctionRecord) -> String {
    let mut lines: Vec<String> = Vec::new();

    lines.push(format!("### {}\n", func.name));

    if func.class != Classification::Documented {
        lines.push(format!("_{}_\n", func.class.as_str()));
    }

    lines.push("```rust".to_string());
    lines.push(func.header.trim_end_matches(['{', ';']).trim_end().to_string());
    lines.push("```".to_string());
    lines.push(String::new());

    if !func.description.is_empty() {
        lines.push(func.description.trim_end().to_string());
        lines.push(String::new());
    }

    if !func.fields.is_empty() {
        for field in &func.fields {
            lines.push(format!("* **{}**: `{}`", field.key, field.value));
        }
        lines.push(String::new());
    }

    lines.join("\n")
}
