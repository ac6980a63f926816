//! Comment input: JSON emitted by an upstream doc-comment parser.

use ngdoc_mapper::ParsedComment;
use serde::Deserialize;

/// Accepted top-level shapes of an input document.
#[derive(Deserialize)]
#[serde(untagged)]
enum CommentFile {
    /// `[ { "tags": [...] }, ... ]`
    Bare(Vec<ParsedComment>),
    /// `{ "comments": [ ... ] }`
    Wrapped { comments: Vec<ParsedComment> },
}

/// Parse one input document into its comments, in document order.
pub fn parse(content: &str) -> serde_json::Result<Vec<ParsedComment>> {
    let file: CommentFile = serde_json::from_str(content)?;
    Ok(match file {
        CommentFile::Bare(comments) | CommentFile::Wrapped { comments } => comments,
    })
}
