//! Shared configuration types for statbar overlays
//!
//! This crate contains the serializable configuration types that are shared
//! between the overlay engine and whatever host application persists and
//! edits them. The engine reads these values fresh every frame; nothing in
//! here is cached or interpreted by this crate.

use serde::{Deserialize, Serialize};

// ─────────────────────────────────────────────────────────────────────────────
// Colors
// ─────────────────────────────────────────────────────────────────────────────

/// RGBA color as [r, g, b, a] bytes
pub type Color = [u8; 4];

/// Default colors for overlays
pub mod overlay_colors {
    use super::Color;

    /// Neutral color; bars rendered with it skip the tint pass entirely.
    pub const WHITE: Color = [255, 255, 255, 255];
}

// ─────────────────────────────────────────────────────────────────────────────
// Alignment & Text Style
// ─────────────────────────────────────────────────────────────────────────────

/// Vertical anchor for content placed inside an overlay's bounds.
///
/// This enum is deliberately closed: anchor resolution matches on it
/// exhaustively, so adding a variant is a compile error until every
/// consumer handles it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum VerticalAlignment {
    #[default]
    Top,
    Middle,
    Bottom,
}

/// Horizontal alignment for text rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum HorizontalAlignment {
    Left,
    #[default]
    Center,
    Right,
}

/// Shadow style applied when drawing overlay text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TextShadow {
    None,
    Normal,
    #[default]
    Outline,
}

// ─────────────────────────────────────────────────────────────────────────────
// Bar Overlay Configuration
// ─────────────────────────────────────────────────────────────────────────────

/// Configuration for a templated bar overlay
///
/// Position and size are in render-space units. The host may change any of
/// these between frames; the engine never holds onto a stale copy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BarOverlayConfig {
    /// Left edge of the overlay, render-space
    #[serde(default)]
    pub x: f32,
    /// Top edge of the overlay, render-space
    #[serde(default)]
    pub y: f32,
    /// Overlay width
    #[serde(default = "default_width")]
    pub width: f32,
    /// Overlay height
    #[serde(default = "default_height")]
    pub height: f32,
    /// Where the text row + bar block anchors within the overlay bounds
    #[serde(default)]
    pub vertical_alignment: VerticalAlignment,
    /// Alignment of the text row within the overlay width
    #[serde(default)]
    pub horizontal_alignment: HorizontalAlignment,
    /// Mirror the bar's fill direction
    #[serde(default)]
    pub flip: bool,
    /// Multiplier applied to the bar texture's native height
    #[serde(default = "default_height_modifier")]
    pub height_modifier: f32,
    /// Minimum seconds between template re-evaluations
    #[serde(default = "default_seconds_per_recalculation")]
    pub seconds_per_recalculation: f32,
    /// Shadow style for the text row
    #[serde(default)]
    pub text_shadow: TextShadow,
    /// Render color for both text and bar tint
    #[serde(default = "default_color")]
    pub color: Color,
}

fn default_width() -> f32 {
    81.0
}
fn default_height() -> f32 {
    21.0
}
fn default_height_modifier() -> f32 {
    1.0
}
fn default_seconds_per_recalculation() -> f32 {
    0.1
}
fn default_color() -> Color {
    overlay_colors::WHITE
}

impl Default for BarOverlayConfig {
    fn default() -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            width: default_width(),
            height: default_height(),
            vertical_alignment: VerticalAlignment::Top,
            horizontal_alignment: HorizontalAlignment::Center,
            flip: false,
            height_modifier: default_height_modifier(),
            seconds_per_recalculation: default_seconds_per_recalculation(),
            text_shadow: TextShadow::Outline,
            color: default_color(),
        }
    }
}
