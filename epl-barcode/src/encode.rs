use rxing::{
    BarcodeFormat, Writer,
    oned::{
        CodaBarWriter, Code39Writer, Code93Writer, Code128Writer, EAN8Writer, EAN13Writer,
        ITFWriter, UPCAWriter, UPCEWriter,
    },
};
use thiserror::Error;

use crate::selection::{Selection, Symbology};

#[derive(Debug, Clone, PartialEq, Error)]
pub enum EncodeError {
    #[error("no encoder for symbology {0:?}")]
    Unsupported(Symbology),
    #[error("barcode data rejected: {0}")]
    Data(String),
}

/// Encoded symbol pixels, one byte per module cell, 1 = bar.
#[derive(Debug, Clone, PartialEq)]
pub struct SymbolBitmap {
    pub width: usize,
    pub height: usize,
    pub pixels: Vec<u8>,
}

/// An encoded symbol plus the human readable text printed beneath it.
#[derive(Debug, Clone, PartialEq)]
pub struct Symbol {
    pub bitmap: SymbolBitmap,
    pub label: String,
}

pub struct SymbolRequest<'a> {
    pub selection: Selection,
    pub data: &'a str,
    /// Narrow bar width in dots; becomes the module width.
    pub narrow: u32,
    /// Wide bar width in dots. Accepted for command compatibility; the
    /// one-dimensional writers derive wide bars from the module width.
    pub wide: u32,
    pub height: u32,
}

/// Encodes a barcode request into a bitmap and its label text.
pub fn encode(request: &SymbolRequest) -> Result<Symbol, EncodeError> {
    let symbology = request.selection.symbology();
    let mut data = request.data.to_string();
    normalize(symbology, &mut data)?;

    let narrow = request.narrow.max(1);
    let width = (estimated_modules(symbology, &data) * narrow as usize) as i32;
    let height = request.height.max(1) as i32;

    let matrix = match symbology {
        Symbology::Code39 => {
            Code39Writer::default().encode(&data, &BarcodeFormat::CODE_39, width, height)
        }
        Symbology::Code93 => {
            Code93Writer::default().encode(&data, &BarcodeFormat::CODE_93, width, height)
        }
        Symbology::Code128 => {
            Code128Writer::default().encode(&data, &BarcodeFormat::CODE_128, width, height)
        }
        Symbology::Codabar => {
            CodaBarWriter::default().encode(&data, &BarcodeFormat::CODABAR, width, height)
        }
        Symbology::Ean8 => {
            EAN8Writer::default().encode(&data, &BarcodeFormat::EAN_8, width, height)
        }
        Symbology::Ean13 => {
            EAN13Writer::default().encode(&data, &BarcodeFormat::EAN_13, width, height)
        }
        Symbology::UpcA => {
            UPCAWriter::default().encode(&data, &BarcodeFormat::UPC_A, width, height)
        }
        Symbology::UpcE => {
            UPCEWriter::default().encode(&data, &BarcodeFormat::UPC_E, width, height)
        }
        Symbology::Interleaved2of5 => {
            ITFWriter::default().encode(&data, &BarcodeFormat::ITF, width, height)
        }
        Symbology::Postnet
        | Symbology::Planet
        | Symbology::JapanesePost
        | Symbology::GermanPost
        | Symbology::Msi => return Err(EncodeError::Unsupported(symbology)),
    }
    .map_err(|error| EncodeError::Data(error.to_string()))?;

    let width = matrix.width() as usize;
    let height = matrix.height() as usize;
    let mut pixels = Vec::with_capacity(width * height);
    for y in 0..height {
        for x in 0..width {
            pixels.push(u8::from(matrix.get(x as u32, y as u32)));
        }
    }

    let label = label_text(symbology, &data);
    Ok(Symbol {
        bitmap: SymbolBitmap {
            width,
            height,
            pixels,
        },
        label,
    })
}

fn normalize(symbology: Symbology, data: &mut String) -> Result<(), EncodeError> {
    match symbology {
        Symbology::Ean13 => normalize_ean13(data),
        // The interleaved symbology packs digit pairs, so the count must be
        // even.
        Symbology::Interleaved2of5 => {
            if data.len() % 2 != 0 {
                data.insert(0, '0');
            }
            Ok(())
        }
        _ => Ok(()),
    }
}

/// Pads or truncates to 12 digits and appends the mod 10 check digit, unless
/// the caller already supplied all 13.
fn normalize_ean13(data: &mut String) -> Result<(), EncodeError> {
    if data.len() == 13 {
        return Ok(());
    }
    match data.len() {
        12 => {}
        len if len < 12 => {
            let mut padded = "0".repeat(12 - len);
            padded.push_str(data);
            *data = padded;
        }
        _ => {
            let (head, _) = data.split_at(12);
            *data = head.to_string();
        }
    }
    let check = mod10_check_digit(data)?;
    data.push_str(&check.to_string());
    Ok(())
}

fn mod10_check_digit(digits: &str) -> Result<u32, EncodeError> {
    let mut sum = 0;
    for (i, ch) in digits.chars().rev().enumerate() {
        let digit = ch
            .to_digit(10)
            .ok_or_else(|| EncodeError::Data(format!("{digits:?} is not numeric")))?;
        sum += if i % 2 == 0 { digit * 3 } else { digit };
    }
    Ok((10 - (sum % 10)) % 10)
}

fn label_text(symbology: Symbology, data: &str) -> String {
    match symbology {
        Symbology::Ean13 if data.len() == 13 => {
            let (head, rest) = data.split_at(1);
            let (left, right) = rest.split_at(6);
            format!("{head} {left} {right}")
        }
        _ => data.to_string(),
    }
}

/// Module count estimates, including quiet zones, used to request an output
/// width that makes the writer scale each module to the narrow bar width.
fn estimated_modules(symbology: Symbology, data: &str) -> usize {
    let len = data.len();
    match symbology {
        // 13 modules per character at a 2:1 wide ratio, start and stop
        // characters included.
        Symbology::Code39 => (len + 2) * 13 + 20,
        // 9 modules per character, start, stop and termination bar.
        Symbology::Code93 => (len + 3) * 9 + 1 + 20,
        // Start code, one code per character, checksum and stop pattern.
        Symbology::Code128 => 11 + (len * 11) + 11 + 13 + 20,
        Symbology::Codabar => (len + 2) * 12 + 20,
        // Guards and 4 digit pairs.
        Symbology::Ean8 => 67 + 14,
        // Guards, 12 encoded digits and quiet zones.
        Symbology::Ean13 => 95 + 22,
        Symbology::UpcA => 95 + 18,
        Symbology::UpcE => 51 + 18,
        // Start, one 9 module pattern per digit pair, stop.
        Symbology::Interleaved2of5 => 4 + (len / 2) * 18 + 6 + 20,
        Symbology::Postnet
        | Symbology::Planet
        | Symbology::JapanesePost
        | Symbology::GermanPost
        | Symbology::Msi => 0,
    }
}
