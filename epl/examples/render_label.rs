use std::sync::Arc;

use epl::{EplPreview, FontTable, TtfFace};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let (Some(program_path), Some(font_path)) = (args.next(), args.next()) else {
        eprintln!("usage: render_label <program.epl> <font.ttf>");
        std::process::exit(2);
    };

    let program = std::fs::read_to_string(program_path)?;
    let face = TtfFace::from_bytes(&std::fs::read(font_path)?)?;
    let preview = EplPreview::new(FontTable::resident(Arc::new(face)));

    let output = preview.render_program(&program)?;
    for fault in &output.faults {
        eprintln!("fault: {fault}");
    }
    std::fs::write("label.png", output.png)?;
    println!("Wrote label.png");
    Ok(())
}
