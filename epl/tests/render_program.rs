use std::sync::Arc;

use epl::{
    CollectDiagnostics, EplPreview, FontTable, GlyphBitmap, RenderError, Typeface,
};

/// Monospaced face with fixed metrics so no font file is needed.
struct FixedFace;

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

fn preview() -> EplPreview {
    EplPreview::new(FontTable::resident(Arc::new(FixedFace)))
}

const PNG_SIGNATURE: [u8; 8] = [0x89, b'P', b'N', b'G', b'\r', b'\n', 0x1a, b'\n'];

#[test]
fn renders_a_full_program_to_png() {
    let program = "\
        N\n\
        q406\n\
        Q203,24\n\
        A20,20,0,2,1,1,N,\"SHIP TO\"\n\
        B20,60,0,3,2,4,60,B,\"998152\"\n\
        X10,10,2,396,193\n\
        LO20,140,200,4\n\
        GW40,40,4,8,data\n\
        P1\n";
    let output = preview().render_program(program).unwrap();
    assert!(output.faults.is_empty());
    assert!(output.png.starts_with(&PNG_SIGNATURE));
}

#[test]
fn hard_faults_are_surfaced_without_stopping_the_batch() {
    let program = "q200\nQ100,24\nA10,10,0,1,1,1,X,\"BAD\"\nP1";
    let output = preview().render_program(program).unwrap();
    assert_eq!(output.faults.len(), 1);
    assert!(matches!(
        output.faults[0],
        RenderError::InvalidEnumeration { flag: 'X', .. }
    ));
}

#[test]
fn skippable_faults_reach_the_diagnostics_sink() {
    let program = "q200\nQ100,24\nB10,10,0,3\nP1";
    let mut diagnostics = CollectDiagnostics::default();
    let output = preview()
        .render_program_with(program, &mut diagnostics)
        .unwrap();
    assert!(output.faults.is_empty());
    assert_eq!(
        diagnostics.messages,
        vec!["RenderBarcode failed, 9 arguments required: B10,10,0,3".to_string()]
    );
}
