//! Rasterizes tokenized EPL2 commands onto an in-memory canvas.
//!
//! Rendering never aborts a batch: commands that cannot be drawn are either
//! reported to the [`Diagnostics`] sink and skipped, or collected as faults
//! on the finished [`Rendered`] when the failure is a hard one.

mod args;
mod context;
mod diag;
mod error;
mod fields;
mod font;
#[cfg(test)]
mod testutil;
mod transform;

pub use context::DrawingContext;
pub use diag::{CollectDiagnostics, Diagnostics, LogDiagnostics};
pub use error::RenderError;
pub use fields::ReverseVideo;
pub use font::{FontHandle, FontTable, GlyphBitmap, TtfFace, Typeface};

use epl_parser::EplCommand;
use tiny_skia::{Color, Pixmap};

use crate::fields::{BarcodeField, BoxField, LineField, TextField};

/// Canvas dimensions used when a program does not set them itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    pub width: u32,
    pub height: u32,
}

impl Default for RenderOptions {
    /// A 4x6 inch label at 203 dpi.
    fn default() -> Self {
        Self {
            width: 812,
            height: 1218,
        }
    }
}

/// A finished canvas plus the hard faults encountered along the way.
pub struct Rendered {
    pub pixmap: Pixmap,
    pub faults: Vec<RenderError>,
}

/// Renders a command batch onto a fresh white canvas.
///
/// `q` and `Q` commands anywhere in the batch size the canvas before any
/// drawing happens. Skippable faults go to `diagnostics`; hard faults land
/// in [`Rendered::faults`]. Both kinds leave the rest of the batch running.
pub fn render(
    commands: &[EplCommand],
    fonts: &FontTable,
    diagnostics: &mut dyn Diagnostics,
    options: RenderOptions,
) -> Result<Rendered, RenderError> {
    let (width, height) = canvas_size(commands, options);
    let mut pixmap =
        Pixmap::new(width, height).ok_or(RenderError::Canvas { width, height })?;
    pixmap.fill(Color::WHITE);

    let mut faults = Vec::new();
    let mut ctx = DrawingContext::new(&mut pixmap);
    for command in commands {
        if let Err(fault) = render_command(&mut ctx, fonts, command) {
            if fault.is_fatal() {
                log::error!("{fault}");
                faults.push(fault);
            } else {
                diagnostics.report(&fault.to_string());
            }
        }
    }
    Ok(Rendered { pixmap, faults })
}

fn canvas_size(commands: &[EplCommand], options: RenderOptions) -> (u32, u32) {
    let mut width = options.width;
    let mut height = options.height;
    for command in commands {
        match command {
            EplCommand::LabelWidth(dots) => width = *dots,
            EplCommand::LabelLength(dots) => height = *dots,
            _ => {}
        }
    }
    (width, height)
}

fn render_command(
    ctx: &mut DrawingContext,
    fonts: &FontTable,
    command: &EplCommand,
) -> Result<(), RenderError> {
    match command {
        EplCommand::Text(command) => TextField::from_args(command)?.draw(ctx, fonts),
        EplCommand::Barcode(command) => BarcodeField::from_args(command)?.draw(ctx, fonts),
        EplCommand::Box(command) => {
            BoxField::from_args(command)?.draw(ctx);
            Ok(())
        }
        EplCommand::Line { mode, command } => {
            LineField::from_args(*mode, command)?.draw(ctx);
            Ok(())
        }
        EplCommand::ClearBuffer => {
            ctx.clear(Color::WHITE);
            Ok(())
        }
        // canvas sizing happens up front, printing is a no-op off printer
        EplCommand::LabelWidth(_) | EplCommand::LabelLength(_) | EplCommand::Print(_) => Ok(()),
        EplCommand::Unknown(line) => {
            log::debug!("skipping unrecognized command: {line}");
            Ok(())
        }
    }
}
