use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("Unknown value type code: {0:#04x}")]
    UnknownCode(u16),

    #[error("Value type code out of range: {0}")]
    CodeOutOfRange(i32),

    #[error("Unknown value type name: {0}")]
    UnknownName(String),

    #[error("Parse error: {0}")]
    Parse(String),
}
