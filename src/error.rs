use std::path::PathBuf;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Malformed declaration or config document; `path` is the JSON path.
    #[error("at JSON path {path} → {message}")]
    Json { path: String, message: String },

    /// `List`/`Map` without enough generic arguments to build a combinator.
    #[error("`{type_name}` needs {needed} type argument(s), found {found}")]
    MissingTypeArguments {
        type_name: String,
        needed: usize,
        found: usize,
    },

    #[error("insertion offset {offset} is outside the document (len {len})")]
    OffsetOutOfBounds { offset: usize, len: usize },

    #[error("insertion offset {offset} does not fall on a char boundary")]
    NotCharBoundary { offset: usize },

    /// The declaration lacks the source offset an insertion is anchored to.
    #[error("declaration `{type_name}` has no `{anchor}` offset")]
    MissingAnchor {
        type_name: String,
        anchor: &'static str,
    },
}
