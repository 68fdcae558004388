use std::sync::Arc;

use crate::font::{FontTable, GlyphBitmap, Typeface};

/// Monospaced face with fixed metrics: 4x6 fully covered glyphs on a 5 dot
/// advance, 6 dot ascent, 8 dot line height. Keeps pixel assertions exact
/// without shipping font data in the test suite.
pub(crate) struct FixedFace;

impl Typeface for FixedFace {
    fn rasterize(&self, _ch: char, _px: f32) -> GlyphBitmap {
        GlyphBitmap {
            width: 4,
            height: 6,
            xmin: 0,
            ymin: 0,
            advance: 5.0,
            coverage: vec![255; 24],
        }
    }

    fn ascent(&self, _px: f32) -> f32 {
        6.0
    }

    fn line_height(&self, _px: f32) -> f32 {
        8.0
    }
}

pub(crate) fn fixed_fonts() -> FontTable {
    FontTable::resident(Arc::new(FixedFace))
}
