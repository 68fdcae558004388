use epl_barcode::{EncodeError, Selection, Symbol, SymbolRequest};
use epl_parser::Command;
use tiny_skia::{Color, IntSize, Pixmap};

use crate::{
    args::Args,
    context::DrawingContext,
    error::RenderError,
    fields::text::Line,
    font::FontTable,
};

/// Font table id used for the human readable text beneath a symbol.
const LABEL_FONT_ID: i32 = 4;

/// The `B` command: an encoded symbol blitted at its position, captioned
/// bottom-center with the human readable data.
#[derive(Debug)]
pub(crate) struct BarcodeField {
    x: i32,
    y: i32,
    /// Parsed for command compatibility; symbols always print upright.
    rotation: i32,
    selection: Selection,
    narrow: u32,
    wide: u32,
    height: u32,
    data: String,
}

impl BarcodeField {
    pub(crate) fn from_args(command: &Command) -> Result<Self, RenderError> {
        let args = Args::require(command, "RenderBarcode", 9)?;
        let x = args.int(0)?;
        let y = args.int(1)?;
        let rotation = args.int(2)?;
        let code = args.raw(3);
        let selection =
            Selection::from_code(code).ok_or_else(|| RenderError::UnknownSelection {
                code: code.to_string(),
                line: command.line.clone(),
            })?;
        let narrow = args.int(4)?.max(1) as u32;
        let wide = args.int(5)?.max(1) as u32;
        let height = args.int(6)?.max(1) as u32;
        let data = args.string(8);
        Ok(Self {
            x,
            y,
            rotation,
            selection,
            narrow,
            wide,
            height,
            data,
        })
    }

    pub(crate) fn draw(
        &self,
        ctx: &mut DrawingContext,
        fonts: &FontTable,
    ) -> Result<(), RenderError> {
        let symbol = epl_barcode::encode(&SymbolRequest {
            selection: self.selection,
            data: &self.data,
            narrow: self.narrow,
            wide: self.wide,
            height: self.height,
        })?;

        log::debug!(
            "RenderBarcode Position({},{}), Rotation({}), Selection({}), Size({}x{}), Data({})",
            self.x,
            self.y,
            self.rotation * 90,
            self.selection.code(),
            symbol.bitmap.width,
            symbol.bitmap.height,
            self.data
        );

        // resolve the label font before any pixels change, so a missing
        // font leaves the canvas untouched
        let handle = fonts
            .get(LABEL_FONT_ID)
            .ok_or(RenderError::UnknownFont { id: LABEL_FONT_ID })?;
        let image = symbol_pixmap(&symbol).ok_or_else(|| {
            EncodeError::Data(format!(
                "{}x{} symbol has no pixels",
                symbol.bitmap.width, symbol.bitmap.height
            ))
        })?;

        ctx.reset_transform();
        ctx.blit(self.x, self.y, &image);

        let line = Line::layout(&symbol.label, handle);
        let label_x = self.x + ((image.width() as f32 - line.width) / 2.0) as i32;
        let label_y = self.y + image.height() as i32;
        line.draw(ctx, label_x, label_y, Color::BLACK);
        Ok(())
    }
}

/// Expands module cells to an opaque black and white pixmap.
fn symbol_pixmap(symbol: &Symbol) -> Option<Pixmap> {
    let bitmap = &symbol.bitmap;
    let mut data = Vec::with_capacity(bitmap.pixels.len() * 4);
    for &cell in &bitmap.pixels {
        let channel = if cell == 1 { 0 } else { 255 };
        data.extend_from_slice(&[channel, channel, channel, 255]);
    }
    let size = IntSize::from_wh(bitmap.width as u32, bitmap.height as u32)?;
    Pixmap::from_vec(data, size)
}

#[cfg(test)]
mod tests {
    use epl_barcode::{Symbol, SymbolBitmap};
    use epl_parser::{Command, EplCommand, parse_epl};
    use tiny_skia::{Color, Pixmap, PremultipliedColorU8};

    use crate::{
        context::DrawingContext,
        error::RenderError,
        fields::barcode::{BarcodeField, symbol_pixmap},
        testutil::fixed_fonts,
    };

    fn barcode_command(line: &str) -> Command {
        match parse_epl(line).remove(0) {
            EplCommand::Barcode(command) => command,
            other => panic!("expected a barcode command, got {other:?}"),
        }
    }

    fn render(line: &str) -> Pixmap {
        let field = BarcodeField::from_args(&barcode_command(line)).unwrap();
        let mut pixmap = Pixmap::new(600, 200).unwrap();
        pixmap.fill(Color::WHITE);
        let mut ctx = DrawingContext::new(&mut pixmap);
        field.draw(&mut ctx, &fixed_fonts()).unwrap();
        pixmap
    }

    fn black() -> PremultipliedColorU8 {
        Color::BLACK.premultiply().to_color_u8()
    }

    fn label_ink(pixmap: &Pixmap) -> Vec<(u32, u32)> {
        // rows below a 50 dot tall symbol placed at y = 10
        (0..600)
            .flat_map(|x| (60..70).map(move |y| (x, y)))
            .filter(|&(x, y)| pixmap.pixel(x, y).unwrap() == black())
            .collect()
    }

    #[test]
    fn draws_code39_bars() {
        let pixmap = render("B10,10,0,3,2,4,50,N,\"123\"");
        let row: Vec<_> = (0..600)
            .map(|x| pixmap.pixel(x, 30).unwrap())
            .collect();
        assert!(row.contains(&black()), "no bars were drawn");
        // everything above the symbol stays untouched
        assert!((0..600).all(|x| pixmap.pixel(x, 5).unwrap() != black()));
    }

    #[test]
    fn label_is_always_included() {
        let pixmap = render("B10,10,0,3,2,4,50,N,\"123\"");
        assert!(
            !label_ink(&pixmap).is_empty(),
            "no label was drawn beneath the symbol"
        );
    }

    #[test]
    fn p8_flag_does_not_change_the_output() {
        let flagged = render("B10,10,0,3,2,4,50,B,\"123\"");
        let plain = render("B10,10,0,3,2,4,50,N,\"123\"");
        assert_eq!(flagged.data(), plain.data());
        assert!(!label_ink(&plain).is_empty());
    }

    #[test]
    fn empty_symbol_yields_no_pixmap() {
        let symbol = Symbol {
            bitmap: SymbolBitmap {
                width: 0,
                height: 0,
                pixels: Vec::new(),
            },
            label: String::new(),
        };
        assert!(symbol_pixmap(&symbol).is_none());
    }

    #[test]
    fn unknown_selection_is_reported_with_the_tag() {
        let command = barcode_command("B10,10,0,Z9,2,4,50,N,\"123\"");
        let error = BarcodeField::from_args(&command).unwrap_err();
        assert_eq!(
            error,
            RenderError::UnknownSelection {
                code: "Z9".to_string(),
                line: "B10,10,0,Z9,2,4,50,N,\"123\"".to_string(),
            }
        );
        assert!(!error.is_fatal());
    }

    #[test]
    fn short_command_is_an_arity_error() {
        let command = barcode_command("B10,10,0,3");
        let error = BarcodeField::from_args(&command).unwrap_err();
        assert_eq!(
            error.to_string(),
            "RenderBarcode failed, 9 arguments required: B10,10,0,3"
        );
    }
}
