mod commands;
mod parse;

pub use commands::*;
pub use parse::parse_epl;
