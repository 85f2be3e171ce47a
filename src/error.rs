/// Errors that can occur while validating or executing a Brainfuck program.
#[derive(Debug, thiserror::Error)]
pub enum InterpreterError {
    /// Validation found `count` opening brackets with no matching `]`.
    #[error("unbalanced brackets: there are {count} more '[' than ']'")]
    UnmatchedOpenBracket { count: usize },

    /// A `]` was encountered with no preceding unmatched `[`.
    #[error("unmatched ']' at instruction {ip}")]
    UnmatchedCloseBracket { ip: usize },

    /// The data pointer moved outside the tape. `ptr` is the value the
    /// pointer would have taken; `limit` is the tape length.
    #[error("data pointer out of bounds: {ptr} (tape size {limit})")]
    PointerOutOfBounds { ptr: i64, limit: usize },

    /// A `,` instruction executed after the input stream was exhausted.
    #[error("input exhausted: ',' read past end of input")]
    InputExhausted,

    /// An underlying I/O error while reading input or writing output.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
