mod encode;
mod selection;

pub use encode::{EncodeError, Symbol, SymbolBitmap, SymbolRequest, encode};
pub use selection::{Selection, Symbology};
