//! Error type for graph-arena operations.

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("node name must not be empty")]
    EmptyName,

    #[error("duplicate node name: {name}")]
    DuplicateNode { name: String },

    #[error("unknown node index: {0:?}")]
    UnknownIndex(crate::NodeIx),
}
