//! Input loading and output formatting for documents.

use std::{
    io::{self, Read},
    path::Path,
};

use clap::ValueEnum;
use deepnest::node::Node;

/// Output format selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Compact single-line JSON
    Json,
    /// Indented JSON
    Pretty,
}

/// Reads and parses a JSON document from a file, or from stdin for `-`
pub fn read_document(path: &Path) -> Result<Node, Box<dyn std::error::Error>> {
    let text = if path == Path::new("-") {
        let mut buf = String::new();
        io::stdin().read_to_string(&mut buf)?;
        buf
    } else {
        std::fs::read_to_string(path)
            .map_err(|e| format!("Failed to read {}: {e}", path.display()))?
    };

    tracing::debug!(path = %path.display(), bytes = text.len(), "Loaded document");
    Node::from_json_str(&text)
        .map_err(|e| format!("Failed to parse {}: {e}", path.display()).into())
}

/// Renders a document in the selected format
pub fn render(node: &Node, format: OutputFormat) -> deepnest::Result<String> {
    match format {
        OutputFormat::Json => node.to_json_string(),
        OutputFormat::Pretty => node.to_json_string_pretty(),
    }
}

/// Prints a document to stdout in the selected format
pub fn print_document(node: &Node, format: OutputFormat) -> Result<(), Box<dyn std::error::Error>> {
    println!("{}", render(node, format)?);
    Ok(())
}
