//! Renderer module: trait-based format dispatch.

pub mod blocks;
pub mod headers;
pub mod json;
pub mod listing;
pub mod markdown;

use crate::model::Document;
use anyhow::{anyhow, Result};

/// Trait for rendering the records of one source file.
pub trait Renderer {
    fn render(&self, doc: &Document) -> String;
}

/// Create a renderer for the given format name.
pub fn create_renderer(format: &str) -> Result<Box<dyn Renderer>> {
    match format {
        "listing" => Ok(Box::new(listing::ListingRenderer)),
        "blocks" => Ok(Box::new(blocks::BlocksRenderer)),
        "headers" => Ok(Box::new(headers::HeadersRenderer)),
        "markdown" | "md" => Ok(Box::new(markdown::MarkdownRenderer)),
        "json" => Ok(Box::new(json::JsonRenderer)),
        _ => Err(anyhow!(
            "unknown format: {}. Use listing, blocks, headers, markdown, or json",
            format
        )),
    }
}
