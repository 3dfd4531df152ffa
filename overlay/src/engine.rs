//! Bar overlay engine
//!
//! The per-frame evaluate → cache → render cycle for a templated bar
//! overlay. Each engine owns the cache for exactly one overlay; the
//! concrete overlay supplies its templates, visibility, and bar texture
//! through the `BarSource` trait, and geometry/style arrive as a read-only
//! config borrow every frame.
//!
//! Rendering policy, in order:
//! 1. a failed value evaluation draws its message where the text row would
//!    be, and suppresses the bar;
//! 2. the empty sentinel suppresses all drawing for the frame;
//! 3. otherwise the text row is drawn at the resolved anchor and the bar
//!    directly below it, with flip expressed purely as a sign on progress.

use tiny_skia::Color;

use crate::layout::{Rect, resolve_vertical_anchor};
use crate::surface::DrawSurface;
use crate::utils::color_from_rgba;
use statbar_core::{TemplateCache, TemplateEvaluator, current_millis};
use statbar_types::{BarOverlayConfig, overlay_colors};

/// Vertical space reserved for the text row above the bar
const TEXT_ROW_RESERVE: f32 = 10.0;

/// The text and value templates a bar overlay runs
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplatePair {
    pub text_template: String,
    pub value_template: String,
}

impl TemplatePair {
    pub fn new(text_template: impl Into<String>, value_template: impl Into<String>) -> Self {
        Self {
            text_template: text_template.into(),
            value_template: value_template.into(),
        }
    }
}

/// Native dimensions of the bar texture
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BarTexture {
    pub width: u32,
    pub height: u32,
}

/// Accessor contract a concrete bar overlay implements
///
/// The engine is template-pair-agnostic: it asks the source for the live
/// pair on normal renders and the preview pair in preview mode, and never
/// inspects either string itself.
pub trait BarSource {
    /// Templates for normal rendering
    fn template(&self) -> TemplatePair;

    /// Templates for preview/edit mode (often static sample values)
    fn preview_template(&self) -> TemplatePair;

    /// Whether the overlay should render this frame
    fn is_visible(&self) -> bool;

    /// The bar texture's native dimensions
    fn texture(&self) -> BarTexture;
}

/// Everything a render call needs from the frame driver
pub struct FrameContext<'a> {
    pub evaluator: &'a dyn TemplateEvaluator,
    pub surface: &'a mut dyn DrawSurface,
    /// Wall-clock millis sampled once per frame
    pub now_millis: i64,
}

impl<'a> FrameContext<'a> {
    /// Context stamped with the current wall clock
    pub fn new(evaluator: &'a dyn TemplateEvaluator, surface: &'a mut dyn DrawSurface) -> Self {
        Self::at(evaluator, surface, current_millis())
    }

    /// Context with an explicit timestamp (tests, replay)
    pub fn at(
        evaluator: &'a dyn TemplateEvaluator,
        surface: &'a mut dyn DrawSurface,
        now_millis: i64,
    ) -> Self {
        Self {
            evaluator,
            surface,
            now_millis,
        }
    }
}

/// Per-overlay render orchestrator
///
/// Holds only the template cache; all other inputs are borrowed per call.
#[derive(Debug, Default)]
pub struct BarOverlayEngine {
    cache: TemplateCache,
}

impl BarOverlayEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Render one frame, gated on the source's visibility predicate
    pub fn render(
        &mut self,
        ctx: &mut FrameContext<'_>,
        config: &BarOverlayConfig,
        source: &dyn BarSource,
    ) {
        if !source.is_visible() {
            return;
        }
        let templates = source.template();
        self.render_templates(ctx, config, source, &templates);
    }

    /// Render one frame in preview mode, bypassing the visibility gate
    pub fn render_preview(
        &mut self,
        ctx: &mut FrameContext<'_>,
        config: &BarOverlayConfig,
        source: &dyn BarSource,
    ) {
        let templates = source.preview_template();
        self.render_templates(ctx, config, source, &templates);
    }

    fn render_templates(
        &mut self,
        ctx: &mut FrameContext<'_>,
        config: &BarOverlayConfig,
        source: &dyn BarSource,
        templates: &TemplatePair,
    ) {
        self.cache.refresh(
            ctx.evaluator,
            &templates.text_template,
            &templates.value_template,
            ctx.now_millis,
            config.seconds_per_recalculation,
        );

        let bar_height = source.texture().height as f32 * config.height_modifier;
        let render_y = resolve_vertical_anchor(
            config.vertical_alignment,
            config.y,
            config.height,
            bar_height + TEXT_ROW_RESERVE,
        );

        let value = match self.cache.value() {
            Err(err) => {
                // The message takes the value text's place; no bar for an
                // undefined value.
                tracing::debug!(error = %err, "value template failed, rendering message");
                draw_text_row(ctx.surface, config, render_y, err.message());
                return;
            }
            Ok(value) => *value,
        };

        // Empty sentinel: this stat is not applicable right now, so the
        // overlay is invisible for the frame.
        if value.is_empty() {
            return;
        }

        draw_text_row(ctx.surface, config, render_y, self.cache.text());

        let sign = if config.flip { -1.0 } else { 1.0 };
        draw_bar(
            ctx.surface,
            config,
            source.texture(),
            render_y + TEXT_ROW_RESERVE,
            bar_height,
            sign * value.progress(),
        );
    }
}

fn draw_text_row(surface: &mut dyn DrawSurface, config: &BarOverlayConfig, y: f32, text: &str) {
    let rect = Rect::from_xywh(config.x, y, config.width, TEXT_ROW_RESERVE);
    surface.draw_aligned_text(
        rect,
        text,
        config.horizontal_alignment,
        config.text_shadow,
        color_from_rgba(config.color),
    );
}

fn draw_bar(
    surface: &mut dyn DrawSurface,
    config: &BarOverlayConfig,
    texture: BarTexture,
    y: f32,
    height: f32,
    progress: f32,
) {
    let rect = Rect::from_xywh(config.x, y, config.width, height);
    let uv = Rect::new(0.0, 0.0, texture.width as f32, texture.height as f32);
    // Byte comparison against the neutral color; the untinted path skips a
    // redundant multiply in the surface.
    let tint: Option<Color> = if config.color == overlay_colors::WHITE {
        None
    } else {
        Some(color_from_rgba(config.color))
    };
    surface.draw_progress_bar(rect, uv, progress, tint);
}
