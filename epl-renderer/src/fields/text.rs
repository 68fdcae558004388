use epl_parser::Command;
use tiny_skia::{Color, IntSize, Pixmap};

use crate::{
    args::Args,
    context::DrawingContext,
    error::RenderError,
    font::{FontHandle, FontTable, GlyphBitmap},
    transform::field_transform,
};

/// Foreground/background pair selected by the reverse video flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReverseVideo {
    BlackOnWhite,
    WhiteOnBlack,
}

impl ReverseVideo {
    pub fn from_flag(flag: char) -> Option<Self> {
        match flag {
            'N' => Some(Self::BlackOnWhite),
            'R' => Some(Self::WhiteOnBlack),
            _ => None,
        }
    }

    pub fn foreground(self) -> Color {
        match self {
            Self::BlackOnWhite => Color::BLACK,
            Self::WhiteOnBlack => Color::WHITE,
        }
    }

    pub fn background(self) -> Color {
        match self {
            Self::BlackOnWhite => Color::WHITE,
            Self::WhiteOnBlack => Color::BLACK,
        }
    }
}

/// The `A` command: positioned, rotated, scaled text over a measured
/// background rectangle.
#[derive(Debug)]
pub(crate) struct TextField {
    x: i32,
    y: i32,
    rotation: i32,
    font_id: i32,
    scale_x: i32,
    scale_y: i32,
    colors: ReverseVideo,
    data: String,
}

impl TextField {
    pub(crate) fn from_args(command: &Command) -> Result<Self, RenderError> {
        let args = Args::require(command, "RenderString", 8)?;
        let x = args.int(0)?;
        let y = args.int(1)?;
        let rotation = args.int(2)?;
        let font_id = args.int(3)?;
        let scale_x = args.int(4)?;
        let scale_y = args.int(5)?;
        let flag = args.flag(6)?;
        let colors = ReverseVideo::from_flag(flag).ok_or_else(|| {
            RenderError::InvalidEnumeration {
                flag,
                line: command.line.clone(),
            }
        })?;
        let data = args.string(7);
        Ok(Self {
            x,
            y,
            rotation,
            font_id,
            scale_x,
            scale_y,
            colors,
            data,
        })
    }

    pub(crate) fn draw(
        &self,
        ctx: &mut DrawingContext,
        fonts: &FontTable,
    ) -> Result<(), RenderError> {
        let handle = fonts
            .get(self.font_id)
            .ok_or(RenderError::UnknownFont { id: self.font_id })?;

        log::debug!(
            "RenderString Position({},{}), Rotation({}), Font({}), Scale({},{}), Type({:?}), Data({})",
            self.x,
            self.y,
            self.rotation * 90,
            self.font_id,
            self.scale_x,
            self.scale_y,
            self.colors,
            self.data
        );

        let line = Line::layout(&self.data, handle);

        // background sized to the measured extent, then the glyphs on top,
        // all under the field transform
        ctx.set_transform(field_transform(
            self.x,
            self.y,
            self.rotation,
            self.scale_x,
            self.scale_y,
        ));
        ctx.fill_rect(
            self.x as f32,
            self.y as f32,
            line.width,
            line.height,
            self.colors.background(),
        );
        line.draw(ctx, self.x, self.y, self.colors.foreground());
        ctx.reset_transform();
        Ok(())
    }
}

struct PlacedGlyph {
    x: f32,
    y: f32,
    glyph: GlyphBitmap,
}

/// A single laid-out line of text: placed glyphs plus the measured extent.
pub(crate) struct Line {
    glyphs: Vec<PlacedGlyph>,
    pub(crate) width: f32,
    pub(crate) height: f32,
}

impl Line {
    pub(crate) fn layout(text: &str, handle: &FontHandle) -> Self {
        let px = handle.px;
        let ascent = handle.face.ascent(px);
        let mut glyphs = Vec::new();
        let mut pen = 0.0f32;
        for ch in text.chars() {
            let glyph = handle.face.rasterize(ch, px);
            let x = pen + glyph.xmin as f32;
            let y = ascent - glyph.height as f32 - glyph.ymin as f32;
            pen += glyph.advance;
            glyphs.push(PlacedGlyph { x, y, glyph });
        }
        Self {
            glyphs,
            width: pen,
            height: handle.face.line_height(px),
        }
    }

    /// Blits the glyphs at their pen positions relative to (x, y), under the
    /// context's current transform.
    pub(crate) fn draw(&self, ctx: &mut DrawingContext, x: i32, y: i32, color: Color) {
        for placed in &self.glyphs {
            let Some(pixmap) = glyph_pixmap(&placed.glyph, color) else {
                continue;
            };
            let gx = x + placed.x.round() as i32;
            let gy = y + placed.y.round() as i32;
            ctx.blit(gx, gy, &pixmap);
        }
    }
}

/// Converts a coverage bitmap into a premultiplied RGBA pixmap of `color`.
fn glyph_pixmap(glyph: &GlyphBitmap, color: Color) -> Option<Pixmap> {
    if glyph.width == 0 || glyph.height == 0 {
        return None;
    }
    let rgba = color.to_color_u8();
    let mut data = Vec::with_capacity(glyph.coverage.len() * 4);
    for &alpha in &glyph.coverage {
        let mul = |channel: u8| ((u16::from(channel) * u16::from(alpha)) / 255) as u8;
        data.push(mul(rgba.red()));
        data.push(mul(rgba.green()));
        data.push(mul(rgba.blue()));
        data.push(alpha);
    }
    let size = IntSize::from_wh(glyph.width as u32, glyph.height as u32)?;
    Pixmap::from_vec(data, size)
}
