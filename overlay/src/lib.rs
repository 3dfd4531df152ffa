//! Statbar overlay engine
//!
//! The render-facing half of the templated bar overlay pipeline.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │                     engine                          │
//! │    BarOverlayEngine, FrameContext, BarSource        │
//! │         (per-frame evaluate→cache→render)           │
//! ├─────────────────────────────────────────────────────┤
//! │                     layout                          │
//! │          Rect, resolve_vertical_anchor              │
//! │               (pure geometry math)                  │
//! ├─────────────────────────────────────────────────────┤
//! │                     surface                         │
//! │                   DrawSurface                       │
//! │        (drawing primitives, host-provided)          │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! Template evaluation and the template cache live in `statbar-core`;
//! configuration types in `statbar-types`.

pub mod engine;
pub mod layout;
pub mod surface;
pub mod utils;

// Re-export commonly used types
pub use engine::{BarOverlayEngine, BarSource, BarTexture, FrameContext, TemplatePair};
pub use layout::{Rect, resolve_vertical_anchor};
pub use surface::DrawSurface;
pub use utils::color_from_rgba;

// Re-export tiny_skia Color for external use
pub use tiny_skia::Color;
