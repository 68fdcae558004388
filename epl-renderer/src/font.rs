use std::sync::Arc;

use crate::error::RenderError;

/// One rasterized glyph plus the metrics needed to place it on a baseline.
#[derive(Debug, Clone)]
pub struct GlyphBitmap {
    pub width: usize,
    pub height: usize,
    pub xmin: i32,
    pub ymin: i32,
    pub advance: f32,
    /// Row-major alpha coverage, one byte per pixel.
    pub coverage: Vec<u8>,
}

/// Face abstraction so the renderer can measure and rasterize text without
/// caring where the glyphs come from.
pub trait Typeface: Send + Sync {
    fn rasterize(&self, ch: char, px: f32) -> GlyphBitmap;
    fn ascent(&self, px: f32) -> f32;
    fn line_height(&self, px: f32) -> f32;
}

/// TrueType face backed by fontdue.
pub struct TtfFace {
    font: fontdue::Font,
}

impl TtfFace {
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, RenderError> {
        let font = fontdue::Font::from_bytes(bytes, fontdue::FontSettings::default())
            .map_err(|message| RenderError::FontLoad(message.to_string()))?;
        Ok(Self { font })
    }
}

impl Typeface for TtfFace {
    fn rasterize(&self, ch: char, px: f32) -> GlyphBitmap {
        let (metrics, coverage) = self.font.rasterize(ch, px);
        GlyphBitmap {
            width: metrics.width,
            height: metrics.height,
            xmin: metrics.xmin,
            ymin: metrics.ymin,
            advance: metrics.advance_width,
            coverage,
        }
    }

    fn ascent(&self, px: f32) -> f32 {
        self.font
            .horizontal_line_metrics(px)
            .map(|metrics| metrics.ascent)
            .unwrap_or(px)
    }

    fn line_height(&self, px: f32) -> f32 {
        self.font
            .horizontal_line_metrics(px)
            .map(|metrics| metrics.new_line_size)
            .unwrap_or(px)
    }
}

/// A font table entry: a face plus the pixel size it prints at.
#[derive(Clone)]
pub struct FontHandle {
    pub face: Arc<dyn Typeface>,
    pub px: f32,
}

/// Printer font table. Command arguments address it with 1-based ids.
pub struct FontTable {
    handles: Vec<FontHandle>,
}

/// Pixel heights of the five resident EPL2 fonts at 203 dpi.
const RESIDENT_FONT_PX: [f32; 5] = [12.0, 16.0, 20.0, 24.0, 48.0];

impl FontTable {
    pub fn new(handles: Vec<FontHandle>) -> Self {
        Self { handles }
    }

    /// Builds the five resident printer fonts from a single face.
    pub fn resident(face: Arc<dyn Typeface>) -> Self {
        let handles = RESIDENT_FONT_PX
            .iter()
            .map(|&px| FontHandle {
                face: Arc::clone(&face),
                px,
            })
            .collect();
        Self { handles }
    }

    /// Resolves the 1-based font id used in command arguments.
    pub fn get(&self, id: i32) -> Option<&FontHandle> {
        if id < 1 {
            return None;
        }
        self.handles.get(id as usize - 1)
    }
}
