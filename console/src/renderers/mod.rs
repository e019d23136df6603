//! Presentation layers for rendered results
//!
//! The result renderer produces a [`RenderedOutput`]; these types turn it
//! into something a surface can show without the core knowing about
//! terminals or markup.

use crate::result::RenderedOutput;

/// Converts a rendered result into text for one kind of surface
pub trait OutputRenderer {
    fn render(&self, output: &RenderedOutput) -> String;
}

pub mod cli;
pub mod html;
pub mod json;
pub mod table;

pub use cli::CliRenderer;
pub use html::HtmlRenderer;
pub use json::JsonRenderer;
pub use table::{TableBuilder, TableStyle};
