//! Drawing surface contract
//!
//! The engine computes geometry and colors; an implementation of
//! `DrawSurface` (tiny-skia raster, GPU quads, a test recorder) does the
//! actual drawing. Font shaping and texture sampling live entirely behind
//! this trait.

use tiny_skia::Color;

use crate::layout::Rect;
use statbar_types::{HorizontalAlignment, TextShadow};

/// Low-level draw primitives consumed by the overlay engine
pub trait DrawSurface {
    /// Draw a textured progress bar
    ///
    /// `rect` is the full bar rectangle; `uv` the texture region mapped
    /// onto it (the engine always passes the full texture). `progress` is
    /// in `[-1, 1]`: magnitude is the filled fraction, a negative sign
    /// mirrors the fill direction. `tint` of `None` means draw the texture
    /// untinted; implementations must produce identical geometry on both
    /// paths.
    fn draw_progress_bar(&mut self, rect: Rect, uv: Rect, progress: f32, tint: Option<Color>);

    /// Draw a single row of text aligned within `rect`
    fn draw_aligned_text(
        &mut self,
        rect: Rect,
        text: &str,
        alignment: HorizontalAlignment,
        shadow: TextShadow,
        color: Color,
    );
}
