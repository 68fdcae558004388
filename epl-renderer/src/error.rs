use epl_barcode::EncodeError;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum RenderError {
    #[error("{renderer} failed, {required} arguments required: {line}")]
    Arity {
        renderer: &'static str,
        required: usize,
        line: String,
    },
    #[error("{renderer} failed, malformed argument {token:?}: {line}")]
    Malformed {
        renderer: &'static str,
        token: String,
        line: String,
    },
    #[error("unknown reverse video flag {flag:?}, expected 'N' or 'R': {line}")]
    InvalidEnumeration { flag: char, line: String },
    #[error("unknown barcode selection {code:?}: {line}")]
    UnknownSelection { code: String, line: String },
    #[error("font {id} is not loaded")]
    UnknownFont { id: i32 },
    #[error(transparent)]
    Encode(#[from] EncodeError),
    #[error("font data rejected: {0}")]
    FontLoad(String),
    #[error("cannot create a {width}x{height} canvas")]
    Canvas { width: u32, height: u32 },
}

impl RenderError {
    /// Faults that abort the whole command and are surfaced to the caller
    /// instead of being logged and skipped.
    pub fn is_fatal(&self) -> bool {
        matches!(self, RenderError::InvalidEnumeration { .. })
    }
}
