//! A direct Brainfuck interpreter over a bounded byte tape.
//!
//! The interpreter loads a program as text, validates that loop brackets are
//! balanced, then executes a fetch-decode-execute loop against a fixed-size
//! tape (50,000 cells by default) with a single data pointer.
//!
//! Features and behaviors:
//! - Tape cells are bytes, zeroed at the start of every run, with wrapping
//!   `+`/`-` arithmetic.
//! - Strict pointer bounds: moving left of cell 0 or past the last cell is a
//!   fatal error, never a silent wrap.
//! - Unbalanced brackets are rejected before execution, with the count of
//!   extra `[` or the position of the stray `]`.
//! - `.` writes one byte to the output sink and flushes immediately; `,`
//!   blocks for one byte from the input source and fails at end of input.
//! - Any character outside `><+-.,[]` is a comment and changes nothing.
//!
//! Quick start:
//!
//! ```
//! use bfi::Interpreter;
//! use std::io;
//!
//! // Classic "Hello World!" in Brainfuck
//! let code = "++++++++++[>+++++++>++++++++++>+++>+<<<<-]>++.>+.+++++++..+++.>++.<<+++++++++++++++.>.+++.------.--------.>+.>.";
//! let mut bf = Interpreter::new(code)?;
//! let mut output = Vec::new();
//! bf.run(io::empty(), &mut output)?;
//! assert_eq!(output, b"Hello World!\n");
//! # Ok::<(), bfi::InterpreterError>(())
//! ```

mod brackets;
mod error;
mod instruction;
mod interpreter;
mod tape;

pub use brackets::BracketTable;
pub use error::InterpreterError;
pub use instruction::Instruction;
pub use interpreter::Interpreter;
pub use tape::{DEFAULT_TAPE_LEN, Tape};
