use std::io::{Read, Write};

use crate::brackets::BracketTable;
use crate::error::InterpreterError;
use crate::instruction::Instruction;
use crate::tape::{DEFAULT_TAPE_LEN, Tape};

/// A Brainfuck interpreter: one program, its bracket table, and the tape.
///
/// All execution state lives in this value; there is no global state, so any
/// number of interpreters can exist side by side. The input source and
/// output sink are passed to [`run`](Self::run) rather than owned here,
/// which keeps the core testable against in-memory buffers.
#[derive(Debug)]
pub struct Interpreter {
    program: Vec<char>,
    brackets: BracketTable,
    tape: Tape,
}

impl Interpreter {
    /// Create an interpreter for `source` with the default 50,000-cell tape.
    ///
    /// Bracket validation happens here, before any execution; unbalanced
    /// programs are rejected with an unmatched-bracket error.
    pub fn new(source: &str) -> Result<Self, InterpreterError> {
        Self::with_tape_len(source, DEFAULT_TAPE_LEN)
    }

    /// Create an interpreter with a custom tape length.
    pub fn with_tape_len(source: &str, tape_len: usize) -> Result<Self, InterpreterError> {
        let program: Vec<char> = source.chars().collect();
        let brackets = BracketTable::build(&program)?;
        Ok(Self {
            program,
            brackets,
            tape: Tape::new(tape_len),
        })
    }

    /// Read-only view of the tape, mainly useful for inspecting final state.
    pub fn tape(&self) -> &Tape {
        &self.tape
    }

    /// Execute the program against `input` and `output` until the
    /// instruction pointer runs past the end of the program.
    ///
    /// The tape is reset to all zeros first, so repeated runs of the same
    /// interpreter are independent. Each `.` writes one byte and flushes
    /// immediately; each `,` blocks for one byte and fails with
    /// [`InterpreterError::InputExhausted`] at end of input, leaving the
    /// cell unchanged. Pointer bounds violations abort the run at once;
    /// output already written stays written.
    pub fn run<R: Read, W: Write>(
        &mut self,
        mut input: R,
        mut output: W,
    ) -> Result<(), InterpreterError> {
        self.tape.reset();

        let mut ip = 0;
        while ip < self.program.len() {
            // Comment characters decode to None and change nothing.
            if let Some(instruction) = Instruction::decode(self.program[ip]) {
                match instruction {
                    Instruction::IncrementPointer => self.tape.move_right()?,
                    Instruction::DecrementPointer => self.tape.move_left()?,
                    Instruction::Increment => self.tape.increment(),
                    Instruction::Decrement => self.tape.decrement(),
                    Instruction::Output => {
                        output.write_all(&[self.tape.current()])?;
                        output.flush()?;
                    }
                    Instruction::Input => {
                        let mut buf = [0u8; 1];
                        match input.read(&mut buf) {
                            Ok(0) => return Err(InterpreterError::InputExhausted),
                            Ok(_) => self.tape.set_current(buf[0]),
                            Err(e) => return Err(InterpreterError::Io(e)),
                        }
                    }
                    Instruction::LoopStart => {
                        if self.tape.current() == 0 {
                            ip = self.brackets.partner(ip).expect("validated bracket");
                        }
                    }
                    Instruction::LoopEnd => {
                        if self.tape.current() != 0 {
                            ip = self.brackets.partner(ip).expect("validated bracket");
                        }
                    }
                }
            }
            // Unconditional advance, also after a jump: execution resumes
            // just past the matched partner bracket.
            ip += 1;
        }

        Ok(())
    }
}
