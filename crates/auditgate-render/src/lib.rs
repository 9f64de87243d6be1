//! Rendering utilities for CI surfaces (Markdown, console summary, GitHub annotations).
//!
//! Renderers work on a flattened, string-only model so that they stay independent of the
//! report schema.

#![forbid(unsafe_code)]

mod gha;
mod markdown;
mod model;
mod text;

pub use gha::render_github_annotations;
pub use markdown::render_markdown;
pub use model::{RenderableCategory, RenderableReport, RenderableVerdict, RenderableVulnerability};
pub use text::render_text;
