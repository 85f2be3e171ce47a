/// The eight recognized Brainfuck operations.
///
/// Dispatch in the execution loop is a match over this enum rather than over
/// raw characters, so the set of handled operations is closed and
/// compiler-checked. Characters outside the instruction set decode to `None`
/// and are treated as comments.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Instruction {
    /// `>` — move the data pointer one cell to the right.
    IncrementPointer,
    /// `<` — move the data pointer one cell to the left.
    DecrementPointer,
    /// `+` — wrapping-increment the current cell.
    Increment,
    /// `-` — wrapping-decrement the current cell.
    Decrement,
    /// `.` — emit the current cell as one byte.
    Output,
    /// `,` — read one byte into the current cell.
    Input,
    /// `[` — jump past the matching `]` when the current cell is zero.
    LoopStart,
    /// `]` — jump back to the matching `[` when the current cell is non-zero.
    LoopEnd,
}

impl Instruction {
    /// Decode a source character. Returns `None` for comment characters.
    pub fn decode(c: char) -> Option<Self> {
        match c {
            '>' => Some(Self::IncrementPointer),
            '<' => Some(Self::DecrementPointer),
            '+' => Some(Self::Increment),
            '-' => Some(Self::Decrement),
            '.' => Some(Self::Output),
            ',' => Some(Self::Input),
            '[' => Some(Self::LoopStart),
            ']' => Some(Self::LoopEnd),
            _ => None,
        }
    }
}
