use crate::{circuit::Role, lit::Lit};

pub type Result<T> = std::result::Result<T, Error>;

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    /// The circuit text does not follow the ASCII AIGER layout.
    #[error("format error on line {line}: {msg}")]
    Format { line: usize, msg: String },

    #[error("AND gate on line {line} defines the inverted literal {lit}")]
    InvertedGateOutput { line: usize, lit: Lit },

    /// DIMACS reserves 0 as the clause terminator, so the constant variable cannot be encoded.
    #[error("AND gate on line {line} uses the constant literal {lit}")]
    ConstantGateLiteral { line: usize, lit: Lit },

    #[error("{role} symbol {index} ({name:?}) has no matching {role} declaration")]
    DanglingSymbol {
        role: Role,
        index: usize,
        name: String,
    },

    #[error("invalid assignment {arg:?}: {msg}")]
    InvalidAssignment { arg: String, msg: String },
}

impl Error {
    pub(crate) fn format(line: usize, msg: impl Into<String>) -> Self {
        Error::Format {
            line,
            msg: msg.into(),
        }
    }
}
