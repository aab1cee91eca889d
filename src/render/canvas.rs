use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::config::RenderStyle;
use crate::interaction::{Drawable, Mode};
use crate::math::Vec2;

/// Draws the current [`Drawable`] onto a 2D canvas
pub struct CanvasRenderer {
    ctx: CanvasRenderingContext2d,
    width: f64,
    height: f64,
    style: RenderStyle,
}

impl CanvasRenderer {
    pub fn new(canvas: &HtmlCanvasElement, style: RenderStyle) -> Result<Self, String> {
        let ctx = canvas
            .get_context("2d")
            .map_err(|_| "Failed to query 2d context".to_string())?
            .ok_or("Failed to get 2d context")?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| "Context is not a CanvasRenderingContext2d".to_string())?;

        Ok(Self {
            ctx,
            width: canvas.width() as f64,
            height: canvas.height() as f64,
            style,
        })
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        self.width = width as f64;
        self.height = height as f64;
    }

    pub fn set_style(&mut self, style: RenderStyle) {
        self.style = style;
    }

    /// Clear the canvas and draw one frame.
    ///
    /// Segments go first so markers stay visible on top of the curve.
    pub fn draw(&self, drawable: &Drawable<'_>, mode: Mode) -> Result<(), String> {
        let ctx = &self.ctx;

        ctx.set_fill_style_str(&self.style.background);
        ctx.fill_rect(0.0, 0.0, self.width, self.height);

        let stroke = match mode {
            Mode::Editing => &self.style.polygon_color,
            Mode::Animating => &self.style.curve_color,
        };
        self.stroke_polyline(drawable.segments, stroke);

        ctx.set_fill_style_str(&self.style.marker_color);
        for point in drawable.markers {
            ctx.begin_path();
            ctx.arc(point.x, point.y, self.style.marker_radius, 0.0, std::f64::consts::TAU)
                .map_err(|_| "Failed to draw marker".to_string())?;
            ctx.fill();
        }

        Ok(())
    }

    fn stroke_polyline(&self, points: &[Vec2], color: &str) {
        let Some((first, rest)) = points.split_first() else {
            return;
        };
        if rest.is_empty() {
            return;
        }

        let ctx = &self.ctx;
        ctx.set_stroke_style_str(color);
        ctx.set_line_width(self.style.line_width);
        ctx.begin_path();
        ctx.move_to(first.x, first.y);
        for point in rest {
            ctx.line_to(point.x, point.y);
        }
        ctx.stroke();
    }
}
