//! Error taxonomy for the documentation pipeline.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// A descriptor did not split into a kind letter and a fully-qualified name.
    #[error("malformed descriptor: {0:?}")]
    MalformedDescriptor(String),

    /// A descriptor kind letter outside the recognized set (T, M, E, F, P).
    #[error("unknown descriptor kind: {0:?}")]
    UnknownDescriptorKind(char),

    /// The documentation XML could not be parsed.
    #[error("malformed documentation file: {0}")]
    MalformedDocument(String),

    /// The type metadata artifact could not be loaded or enumerated.
    #[error("failed to load type metadata: {0}")]
    MetadataLoad(String),
}
