// Classic template renderer.
// Flow: raw record → resolve (dialect synonyms) → section renderers → document assembly.
// Pure and synchronous: no I/O, nothing shared between calls.

pub mod dates;
pub mod document;
pub mod error;
pub mod escape;
pub mod handlers;
pub mod report;
pub mod resolve;
pub mod sections;

// Re-export the public API consumed by the handlers.
pub use document::{render_document, PageHeight, RenderedDocument};
pub use error::RenderError;
