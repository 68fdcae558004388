mod barcode;
mod shapes;
mod text;

pub(crate) use barcode::BarcodeField;
pub(crate) use shapes::{BoxField, LineField};
pub(crate) use text::TextField;
pub use text::ReverseVideo;
