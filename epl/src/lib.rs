//! High level entry point: parse an EPL2 program and render it to a PNG.

mod error;

pub use error::EplError;

pub use epl_barcode::{Selection, Symbology};
pub use epl_parser::{Command, EplCommand, LineMode, parse_epl};
pub use epl_renderer::{
    CollectDiagnostics, Diagnostics, FontHandle, FontTable, GlyphBitmap, LogDiagnostics,
    RenderError, RenderOptions, ReverseVideo, TtfFace, Typeface, render,
};

/// A finished preview: the encoded PNG plus any hard faults the program hit.
pub struct RenderOutput {
    pub png: Vec<u8>,
    pub faults: Vec<RenderError>,
}

/// Renders EPL2 programs against a fixed font table and canvas setup.
pub struct EplPreview {
    fonts: FontTable,
    options: RenderOptions,
}

impl EplPreview {
    pub fn new(fonts: FontTable) -> Self {
        Self {
            fonts,
            options: RenderOptions::default(),
        }
    }

    pub fn with_options(fonts: FontTable, options: RenderOptions) -> Self {
        Self { fonts, options }
    }

    /// Parses and renders `program`, sending skippable diagnostics to the
    /// `log` crate.
    pub fn render_program(&self, program: &str) -> Result<RenderOutput, EplError> {
        self.render_program_with(program, &mut LogDiagnostics)
    }

    /// Parses and renders `program` with a caller supplied diagnostics sink.
    pub fn render_program_with(
        &self,
        program: &str,
        diagnostics: &mut dyn Diagnostics,
    ) -> Result<RenderOutput, EplError> {
        let commands = parse_epl(program);
        let rendered = render(&commands, &self.fonts, diagnostics, self.options)?;
        let png = rendered
            .pixmap
            .encode_png()
            .map_err(|error| EplError::Png(error.to_string()))?;
        Ok(RenderOutput {
            png,
            faults: rendered.faults,
        })
    }
}
