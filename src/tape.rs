use crate::error::InterpreterError;

/// Default tape length in cells.
pub const DEFAULT_TAPE_LEN: usize = 50_000;

/// The interpreter's memory: a fixed-size array of byte cells plus the data
/// pointer selecting the active cell.
///
/// Pointer movement is checked here, so every read and write through this
/// type is in bounds by construction. Cells wrap modulo 256 on `+`/`-`.
#[derive(Debug)]
pub struct Tape {
    cells: Vec<u8>,
    ptr: usize,
}

impl Tape {
    /// Create a tape of `len` zeroed cells with the pointer at cell 0.
    pub fn new(len: usize) -> Self {
        Self {
            cells: vec![0; len],
            ptr: 0,
        }
    }

    /// Zero every cell and return the pointer to cell 0.
    pub fn reset(&mut self) {
        self.cells.fill(0);
        self.ptr = 0;
    }

    /// Number of cells on the tape.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Current data pointer position.
    pub fn ptr(&self) -> usize {
        self.ptr
    }

    /// Value of the cell under the pointer.
    pub fn current(&self) -> u8 {
        self.cells[self.ptr]
    }

    /// Overwrite the cell under the pointer.
    pub fn set_current(&mut self, value: u8) {
        self.cells[self.ptr] = value;
    }

    /// Wrapping-increment the cell under the pointer.
    pub fn increment(&mut self) {
        self.cells[self.ptr] = self.cells[self.ptr].wrapping_add(1);
    }

    /// Wrapping-decrement the cell under the pointer.
    pub fn decrement(&mut self) {
        self.cells[self.ptr] = self.cells[self.ptr].wrapping_sub(1);
    }

    /// Move the pointer one cell to the right.
    ///
    /// Fails with [`InterpreterError::PointerOutOfBounds`] when the move
    /// would leave the tape; the error carries the offending position (equal
    /// to the tape length) and the tape length.
    pub fn move_right(&mut self) -> Result<(), InterpreterError> {
        if self.ptr + 1 >= self.cells.len() {
            return Err(InterpreterError::PointerOutOfBounds {
                ptr: self.cells.len() as i64,
                limit: self.cells.len(),
            });
        }
        self.ptr += 1;
        Ok(())
    }

    /// Move the pointer one cell to the left.
    ///
    /// Fails with [`InterpreterError::PointerOutOfBounds`] when the pointer
    /// is already at cell 0; the error carries the would-be position (-1).
    pub fn move_left(&mut self) -> Result<(), InterpreterError> {
        if self.ptr == 0 {
            return Err(InterpreterError::PointerOutOfBounds {
                ptr: -1,
                limit: self.cells.len(),
            });
        }
        self.ptr -= 1;
        Ok(())
    }
}
