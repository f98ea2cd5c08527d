use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
/// Represents all errors that can occur during lexing or parsing.
pub enum ParseError {
    /// A character that starts no token was found in the source.
    #[error("Error on line {line}, column {column}: Unexpected character '{character}'.")]
    UnexpectedCharacter {
        /// The offending character.
        character: char,
        /// The source line where the error occurred.
        line:      usize,
        /// The source column where the error occurred.
        column:    usize,
    },
    /// The parser needed one kind of token and found another.
    #[error("Error on line {line}, column {column}: Expected {expected}, found {found}.")]
    UnexpectedToken {
        /// Description of what the grammar required at this point.
        expected: String,
        /// The token kind actually present.
        found:    String,
        /// The source line where the error occurred.
        line:     usize,
        /// The source column where the error occurred.
        column:   usize,
    },
    /// A `:` opened a block but no statement was indented under it.
    #[error("Error on line {line}, column {column}: Expected an indented block after ':'.")]
    ExpectedIndentedBlock {
        /// The source line where the error occurred.
        line:   usize,
        /// The source column where the error occurred.
        column: usize,
    },
    /// Expressions or blocks are nested deeper than the parser allows.
    #[error("Error on line {line}, column {column}: Nesting is deeper than {limit} levels.")]
    NestingTooDeep {
        /// The maximum nesting depth.
        limit:  usize,
        /// The source line where the error occurred.
        line:   usize,
        /// The source column where the error occurred.
        column: usize,
    },
}

impl ParseError {
    /// Returns `true` for errors raised by the lexer rather than the parser.
    #[must_use]
    pub const fn is_lexical(&self) -> bool {
        matches!(self, Self::UnexpectedCharacter { .. })
    }

    /// Gets the `(line, column)` position the error points at.
    #[must_use]
    pub const fn position(&self) -> (usize, usize) {
        match self {
            Self::UnexpectedCharacter { line, column, .. }
            | Self::UnexpectedToken { line, column, .. }
            | Self::ExpectedIndentedBlock { line, column }
            | Self::NestingTooDeep { line, column, .. } => (*line, *column),
        }
    }
}
