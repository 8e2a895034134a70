//! View module - renders the model into a softbuffer surface
//!
//! Every redraw repaints the whole window from the model; there is no
//! damage tracking.

mod chrome;
pub mod font;
pub mod frame;
mod table;

pub use frame::{Frame, TextPainter};

use anyhow::{anyhow, Result};
use fontdue::{Font, LineMetrics, Metrics};
use softbuffer::Surface;
use std::collections::HashMap;
use std::num::NonZeroU32;
use std::rc::Rc;
use winit::window::Window;

use semicell::model::AppModel;

pub type GlyphCacheKey = (char, u32);

pub type GlyphCache = HashMap<GlyphCacheKey, (Metrics, Vec<u8>)>;

/// Font measurements at one size
struct FontMetrics {
    font_size: f32,
    line_metrics: LineMetrics,
    char_width: f32,
}

impl FontMetrics {
    fn measure(font: &Font, font_size: f32) -> Result<Self> {
        let line_metrics = font
            .horizontal_line_metrics(font_size)
            .ok_or_else(|| anyhow!("Font missing horizontal line metrics"))?;
        let (metrics, _) = font.rasterize('M', font_size);
        Ok(Self {
            font_size,
            line_metrics,
            char_width: metrics.advance_width,
        })
    }
}

pub struct Renderer {
    font: Font,
    surface: Surface<Rc<Window>, Rc<Window>>,
    width: u32,
    height: u32,
    base_font_size: f32,
    metrics: FontMetrics,
    glyph_cache: GlyphCache,
    scale_factor: f64,
}

fn non_zero(value: u32) -> NonZeroU32 {
    NonZeroU32::new(value).unwrap_or(NonZeroU32::MIN)
}

impl Renderer {
    /// Create a renderer for `window`, sizing text for its scale factor
    pub fn new(
        window: Rc<Window>,
        context: &softbuffer::Context<Rc<Window>>,
        model: &AppModel,
    ) -> Result<Self> {
        let size = window.inner_size();
        let scale_factor = window.scale_factor();

        let mut surface = Surface::new(context, Rc::clone(&window))
            .map_err(|e| anyhow!("Failed to create surface: {}", e))?;
        surface
            .resize(non_zero(size.width), non_zero(size.height))
            .map_err(|e| anyhow!("Failed to resize surface: {}", e))?;

        let font = font::load_font(model.config.font_path.as_deref())?;
        let base_font_size = model.config.font_size;
        let metrics = FontMetrics::measure(&font, base_font_size * scale_factor as f32)?;

        Ok(Self {
            font,
            surface,
            width: size.width,
            height: size.height,
            base_font_size,
            metrics,
            glyph_cache: HashMap::new(),
            scale_factor,
        })
    }

    pub fn char_width(&self) -> f32 {
        self.metrics.char_width
    }

    pub fn line_height(&self) -> usize {
        self.metrics.line_metrics.new_line_size.ceil() as usize
    }

    /// Re-measure the font after a DPI change
    pub fn set_scale_factor(&mut self, scale_factor: f64) -> Result<()> {
        if (scale_factor - self.scale_factor).abs() < f64::EPSILON {
            return Ok(());
        }
        self.metrics = FontMetrics::measure(&self.font, self.base_font_size * scale_factor as f32)?;
        self.scale_factor = scale_factor;
        self.glyph_cache.clear();
        tracing::debug!(scale_factor, "font re-measured");
        Ok(())
    }

    /// Paint the full window
    pub fn render(&mut self, model: &AppModel) -> Result<()> {
        let (width, height) = model.window_size;
        if width == 0 || height == 0 {
            return Ok(());
        }
        if self.width != width || self.height != height {
            self.width = width;
            self.height = height;
            self.surface
                .resize(non_zero(width), non_zero(height))
                .map_err(|e| anyhow!("Failed to resize surface: {}", e))?;
        }

        let line_height = self.line_height();
        let metrics = model.metrics();
        let table_layout = model.table_layout();
        let menu_layout = model.menu_layout();

        let mut buffer = self
            .surface
            .buffer_mut()
            .map_err(|e| anyhow!("Failed to get surface buffer: {}", e))?;

        {
            let mut frame = Frame::new(&mut buffer, width as usize, height as usize);
            let mut painter = TextPainter::new(
                &self.font,
                &mut self.glyph_cache,
                self.metrics.font_size,
                self.metrics.line_metrics.ascent,
                self.metrics.char_width,
                line_height,
            );

            frame.clear(model.theme.table.background.to_argb_u32());
            table::render_table(&mut frame, &mut painter, model, &table_layout);
            chrome::render_menu_bar(&mut frame, &mut painter, model, &menu_layout);
            chrome::render_status_bar(&mut frame, &mut painter, model, &metrics);
            if let Some(menu) = model.ui.menu.open {
                chrome::render_dropdown(&mut frame, &mut painter, model, &menu_layout, menu);
            }
        }

        buffer
            .present()
            .map_err(|e| anyhow!("Failed to present buffer: {}", e))?;
        Ok(())
    }
}
