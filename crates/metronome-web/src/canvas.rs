use glam::DVec2;
use metronome_core::Surface;
use std::f64::consts::TAU;
use wasm_bindgen::JsCast;
use web_sys as web;

/// [`Surface`] backed by a canvas 2D context.
pub struct CanvasSurface {
    ctx: web::CanvasRenderingContext2d,
    width: f64,
    height: f64,
}

impl CanvasSurface {
    pub fn new(canvas: &web::HtmlCanvasElement) -> anyhow::Result<Self> {
        let ctx = canvas
            .get_context("2d")
            .map_err(|e| anyhow::anyhow!("get_context error: {:?}", e))?
            .ok_or_else(|| anyhow::anyhow!("canvas has no 2d context"))?
            .dyn_into::<web::CanvasRenderingContext2d>()
            .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;
        Ok(Self {
            ctx,
            width: canvas.width() as f64,
            height: canvas.height() as f64,
        })
    }

    fn circle_path(&self, center: DVec2, radius: f64) {
        self.ctx.begin_path();
        _ = self.ctx.arc(center.x, center.y, radius, 0.0, TAU);
    }
}

impl Surface for CanvasSurface {
    fn clear(&mut self, color: &str) {
        self.ctx.set_fill_style_str(color);
        self.ctx.fill_rect(0.0, 0.0, self.width, self.height);
    }

    fn set_fill_style(&mut self, style: &str) {
        self.ctx.set_fill_style_str(style);
    }

    fn set_stroke_style(&mut self, style: &str) {
        self.ctx.set_stroke_style_str(style);
    }

    fn set_line_width(&mut self, width: f64) {
        self.ctx.set_line_width(width);
    }

    fn fill_circle(&mut self, center: DVec2, radius: f64) {
        self.circle_path(center, radius);
        self.ctx.fill();
    }

    fn stroke_circle(&mut self, center: DVec2, radius: f64) {
        self.circle_path(center, radius);
        self.ctx.stroke();
    }

    fn stroke_line(&mut self, from: DVec2, to: DVec2) {
        self.ctx.begin_path();
        self.ctx.move_to(from.x, from.y);
        self.ctx.line_to(to.x, to.y);
        self.ctx.stroke();
    }
}
