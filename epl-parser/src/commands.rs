/// How the trailing argument pair of an `L*` command is interpreted.
///
/// Decided once at parse time from the opcode so the renderer never has to
/// scan raw command text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineMode {
    /// `LE`: the pair is a width/height rectangle combined into an empty
    /// region with XOR, then filled.
    Invert,
    /// `LO`: the pair is a width/height rectangle filled solid.
    Solid,
    /// `LS`, `LW`: the pair is the absolute endpoint of a line segment.
    Segment,
}

/// One tokenized command: the raw line plus its argument tokens.
///
/// Quote characters are kept in the tokens; stripping them is the argument
/// extractor's job.
#[derive(Debug, Clone, PartialEq)]
pub struct Command {
    pub line: String,
    pub args: Vec<String>,
}

impl Command {
    pub fn new(line: &str, args: Vec<String>) -> Self {
        Self {
            line: line.to_string(),
            args,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum EplCommand {
    /// `A` draw text
    Text(Command),
    /// `B` draw barcode
    Barcode(Command),
    /// `X` draw box outline
    Box(Command),
    /// `LE`/`LO`/`LS`/`LW` draw line
    Line { mode: LineMode, command: Command },
    /// `N` clear image buffer
    ClearBuffer,
    /// `q` set label width in dots
    LabelWidth(u32),
    /// `Q` set label length in dots
    LabelLength(u32),
    /// `P` print, a no-op for previewing
    Print(u32),
    Unknown(String),
}
