//! Text building primitives used by the renderer.
//!
//! - [`CodeBuilder`] - line buffer with indentation tracking
//! - [`Indent`] - indentation configuration

mod code_builder;
mod indent;

pub use code_builder::{CodeBuilder, javadoc_lines};
pub use indent::Indent;
