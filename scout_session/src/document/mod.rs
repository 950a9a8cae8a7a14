//! Minimal element tree for session documents
//!
//! Session documents only carry elements and attributes, so text nodes,
//! comments and processing instructions are dropped on read.

pub mod element;
pub mod parse;
pub mod render;

pub use element::Element;
pub use parse::parse_document;
pub use render::render_document;

/// Document read/render errors
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DocumentError {
    #[error("XML syntax error at byte {position}: {message}")]
    Syntax { position: usize, message: String },

    #[error("Unclosed element '{name}'")]
    UnclosedElement { name: String },

    #[error("Closing tag without matching opening tag")]
    UnbalancedEnd,

    #[error("Document has no root element")]
    MissingRoot,

    #[error("Document has more than one root element")]
    MultipleRoots,

    #[error("Failed to render document: {message}")]
    Render { message: String },
}
