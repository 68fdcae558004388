use epl_parser::{Command, LineMode};
use tiny_skia::Color;

use crate::{args::Args, context::DrawingContext, error::RenderError};

const FOREGROUND: Color = Color::BLACK;

/// The `X` command: a rectangle outline given by two corners in any order.
#[derive(Debug)]
pub(crate) struct BoxField {
    left: i32,
    top: i32,
    width: i32,
    height: i32,
    thickness: i32,
}

impl BoxField {
    pub(crate) fn from_args(command: &Command) -> Result<Self, RenderError> {
        let args = Args::require(command, "RenderBox", 5)?;
        let x1 = args.int(0)?;
        let y1 = args.int(1)?;
        let thickness = args.int(2)?;
        let x2 = args.int(3)?;
        let y2 = args.int(4)?;

        // normalize to top-left regardless of corner order
        Ok(Self {
            left: x1.min(x2),
            top: y1.min(y2),
            width: (x1 - x2).abs(),
            height: (y1 - y2).abs(),
            thickness,
        })
    }

    pub(crate) fn draw(&self, ctx: &mut DrawingContext) {
        log::debug!(
            "RenderBox Corner({},{}), Size({},{}), Thickness({})",
            self.left,
            self.top,
            self.width,
            self.height,
            self.thickness
        );
        ctx.reset_transform();
        ctx.stroke_rect(
            self.left as f32,
            self.top as f32,
            self.width as f32,
            self.height as f32,
            self.thickness as f32,
            FOREGROUND,
        );
    }
}

/// The `L*` commands share one argument layout with mode dependent meaning:
/// solid and invert read the trailing pair as a width/height, segment mode
/// reads the same pair as an absolute endpoint.
#[derive(Debug)]
pub(crate) struct LineField {
    mode: LineMode,
    x: i32,
    y: i32,
    length_x: i32,
    length_y: i32,
}

impl LineField {
    pub(crate) fn from_args(mode: LineMode, command: &Command) -> Result<Self, RenderError> {
        let args = Args::require(command, "RenderLine", 4)?;
        Ok(Self {
            mode,
            x: args.int(0)?,
            y: args.int(1)?,
            length_x: args.int(2)?,
            length_y: args.int(3)?,
        })
    }

    pub(crate) fn draw(&self, ctx: &mut DrawingContext) {
        log::debug!(
            "RenderLine Mode({:?}), Position({},{}), Length({},{})",
            self.mode,
            self.x,
            self.y,
            self.length_x,
            self.length_y
        );
        ctx.reset_transform();
        let x = self.x as f32;
        let y = self.y as f32;
        match self.mode {
            LineMode::Invert => ctx.fill_rect_xor(
                x,
                y,
                self.length_x as f32,
                self.length_y as f32,
                FOREGROUND,
            ),
            LineMode::Solid => ctx.fill_rect(
                x,
                y,
                self.length_x as f32,
                self.length_y as f32,
                FOREGROUND,
            ),
            LineMode::Segment => ctx.stroke_line(
                x,
                y,
                self.length_x as f32,
                self.length_y as f32,
                1.0,
                FOREGROUND,
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use epl_parser::{Command, EplCommand, LineMode, parse_epl};
    use tiny_skia::{Color, Pixmap, PremultipliedColorU8};

    use crate::{
        context::DrawingContext,
        error::RenderError,
        fields::shapes::{BoxField, LineField},
    };

    fn box_command(line: &str) -> Command {
        match parse_epl(line).remove(0) {
            EplCommand::Box(command) => command,
            other => panic!("expected a box command, got {other:?}"),
        }
    }

    fn line_command(line: &str) -> (LineMode, Command) {
        match parse_epl(line).remove(0) {
            EplCommand::Line { mode, command } => (mode, command),
            other => panic!("expected a line command, got {other:?}"),
        }
    }

    fn white_canvas(width: u32, height: u32) -> Pixmap {
        let mut pixmap = Pixmap::new(width, height).unwrap();
        pixmap.fill(Color::WHITE);
        pixmap
    }

    fn black() -> PremultipliedColorU8 {
        Color::BLACK.premultiply().to_color_u8()
    }

    fn white() -> PremultipliedColorU8 {
        Color::WHITE.premultiply().to_color_u8()
    }

    fn draw_box(line: &str) -> Pixmap {
        let field = BoxField::from_args(&box_command(line)).unwrap();
        let mut pixmap = white_canvas(100, 60);
        let mut ctx = DrawingContext::new(&mut pixmap);
        field.draw(&mut ctx);
        pixmap
    }

    fn draw_line(line: &str) -> Pixmap {
        let (mode, command) = line_command(line);
        let field = LineField::from_args(mode, &command).unwrap();
        let mut pixmap = white_canvas(100, 60);
        let mut ctx = DrawingContext::new(&mut pixmap);
        field.draw(&mut ctx);
        pixmap
    }

    #[test]
    fn box_is_corner_order_invariant() {
        let forward = draw_box("X10,10,2,50,30");
        let reversed = draw_box("X50,30,2,10,10");
        assert_eq!(forward.data(), reversed.data());
        // the outline actually produced ink
        assert_ne!(forward.data(), white_canvas(100, 60).data());
    }

    #[test]
    fn box_outline_is_not_filled() {
        let pixmap = draw_box("X10,10,2,50,30");
        // center of the box stays white
        assert_eq!(pixmap.pixel(30, 20).unwrap(), white());
    }

    #[test]
    fn solid_mode_fills_exactly_the_rectangle() {
        let pixmap = draw_line("LO10,10,40,5");
        for y in 0..60u32 {
            for x in 0..100u32 {
                let inside = (10..50).contains(&x) && (10..15).contains(&y);
                let expected = if inside { black() } else { white() };
                assert_eq!(pixmap.pixel(x, y).unwrap(), expected, "pixel ({x},{y})");
            }
        }
    }

    #[test]
    fn invert_mode_matches_solid_on_a_fresh_canvas() {
        let invert = draw_line("LE10,10,40,5");
        let solid = draw_line("LO10,10,40,5");
        assert_eq!(invert.data(), solid.data());
    }

    #[test]
    fn segment_mode_reads_the_pair_as_an_endpoint() {
        let segment = draw_line("LS10,10,40,5");
        let solid = draw_line("LO10,10,40,5");
        assert_ne!(segment.data(), solid.data());

        // a rectangle interpretation would blacken (45,12); the segment
        // from (10,10) to (40,5) never reaches it
        assert_eq!(segment.pixel(45, 12).unwrap(), white());
        // but the stroke produced ink somewhere
        assert_ne!(segment.data(), white_canvas(100, 60).data());
    }

    #[test]
    fn short_box_command_is_an_arity_error() {
        let error = BoxField::from_args(&box_command("X10,10,2")).unwrap_err();
        assert_eq!(
            error,
            RenderError::Arity {
                renderer: "RenderBox",
                required: 5,
                line: "X10,10,2".to_string(),
            }
        );
    }

    #[test]
    fn short_line_command_is_an_arity_error() {
        let (mode, command) = line_command("LO10,10");
        let error = LineField::from_args(mode, &command).unwrap_err();
        assert_eq!(
            error.to_string(),
            "RenderLine failed, 4 arguments required: LO10,10"
        );
    }
}
