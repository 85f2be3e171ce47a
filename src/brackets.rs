use crate::error::InterpreterError;

/// Precomputed partner positions for every `[` and `]` in a program.
///
/// `partner(i)` is the index of the bracket matching the one at `i`, so loop
/// jumps are O(1) lookups instead of rescans. Built once by a single
/// left-to-right pass before execution starts; programs with unbalanced
/// brackets are rejected here and never run.
#[derive(Debug)]
pub struct BracketTable {
    partners: Vec<Option<usize>>,
}

impl BracketTable {
    /// Scan `program` and record the partner of every bracket.
    ///
    /// A `]` with nothing on the open-bracket stack fails with
    /// [`InterpreterError::UnmatchedCloseBracket`]; brackets still open at the
    /// end of the scan fail with [`InterpreterError::UnmatchedOpenBracket`]
    /// carrying their count.
    pub fn build(program: &[char]) -> Result<Self, InterpreterError> {
        let mut partners: Vec<Option<usize>> = vec![None; program.len()];
        let mut stack: Vec<usize> = Vec::new();

        for (i, &c) in program.iter().enumerate() {
            if c == '[' {
                stack.push(i);
            } else if c == ']' {
                let Some(open_index) = stack.pop() else {
                    return Err(InterpreterError::UnmatchedCloseBracket { ip: i });
                };
                partners[open_index] = Some(i);
                partners[i] = Some(open_index);
            }
        }

        if !stack.is_empty() {
            return Err(InterpreterError::UnmatchedOpenBracket { count: stack.len() });
        }

        Ok(Self { partners })
    }

    /// Partner index of the bracket at `ip`, or `None` for non-bracket
    /// positions.
    pub fn partner(&self, ip: usize) -> Option<usize> {
        self.partners.get(ip).copied().flatten()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    #[test]
    fn table_is_bidirectional_for_every_bracket() {
        let program = chars("+[>[-]<]");
        let table = BracketTable::build(&program).unwrap();
        for (i, &c) in program.iter().enumerate() {
            if c == '[' || c == ']' {
                let j = table.partner(i).expect("every bracket has a partner");
                assert_eq!(table.partner(j), Some(i));
            } else {
                assert_eq!(table.partner(i), None);
            }
        }
    }

    #[test]
    fn nested_brackets_pair_inner_with_inner() {
        let table = BracketTable::build(&chars("[[]]")).unwrap();
        assert_eq!(table.partner(0), Some(3));
        assert_eq!(table.partner(1), Some(2));
        assert_eq!(table.partner(2), Some(1));
        assert_eq!(table.partner(3), Some(0));
    }

    #[test]
    fn program_without_brackets_builds_an_empty_table() {
        let table = BracketTable::build(&chars("+-><.,")).unwrap();
        for i in 0..6 {
            assert_eq!(table.partner(i), None);
        }
    }

    #[test]
    fn unmatched_open_brackets_are_counted() {
        let err = BracketTable::build(&chars("[[+[")).unwrap_err();
        assert!(matches!(
            err,
            InterpreterError::UnmatchedOpenBracket { count: 3 }
        ));
    }

    #[test]
    fn unmatched_close_bracket_reports_its_position() {
        let err = BracketTable::build(&chars("+]")).unwrap_err();
        assert!(matches!(
            err,
            InterpreterError::UnmatchedCloseBracket { ip: 1 }
        ));
    }

    #[test]
    fn close_before_open_is_rejected_even_if_counts_balance() {
        let err = BracketTable::build(&chars("][")).unwrap_err();
        assert!(matches!(
            err,
            InterpreterError::UnmatchedCloseBracket { ip: 0 }
        ));
    }
}
