use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PuzzleError {
    #[error("malformed target: {0:?}")]
    MalformedTarget(String),

    #[error("index {index} out of range 1..={side}")]
    IndexOutOfRange { index: String, side: usize },

    #[error("unknown twist: {0:?}")]
    UnknownTwist(char),

    #[error("malformed instruction: {0:?}")]
    MalformedInstruction(String),

    #[error("line {line}: value leaves the 64-bit range")]
    Overflow { line: usize },
}
