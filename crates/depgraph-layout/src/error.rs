//! The layout engine's error taxonomy.
//!
//! Matches `manatee::error::Error` and `merman-core::error::Error` in shape: one flat,
//! `thiserror`-derived enum, no nested source chains. The core never recovers from these; every
//! variant aborts the whole layout (§7: layout is all-or-nothing).

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The input map was malformed, or the dependency graph it describes cannot be laid out
    /// (e.g. it contains a cycle after self-loop removal, which the pruning stage cannot
    /// terminate on).
    #[error("invalid layout input: {reason}")]
    InvalidInput { reason: String },

    /// A collaborator-level error: a caller asked for a category the input scanner does not
    /// recognise. The core never produces this itself; it exists so a scanner collaborator can
    /// report through the same error type.
    #[error("unknown category: {name}")]
    UnknownCategory { name: String },

    /// The layout selector did not match any registered back-end.
    #[error("unknown layout back-end: {name}")]
    UnknownLayout { name: String },
}

impl From<depgraph_model::Error> for Error {
    fn from(err: depgraph_model::Error) -> Self {
        Error::InvalidInput {
            reason: err.to_string(),
        }
    }
}
