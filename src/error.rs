use thiserror::Error;

/// Generator defects. Rendering either returns a complete file set or one of
/// these; it never emits a partially substituted file.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GenerateError {
    /// A placeholder had no value, or placeholder syntax survived substitution
    #[error("unresolved placeholder `{token}` in {file}")]
    UnresolvedPlaceholder {
        /// Generated file path
        file: String,
        /// Token name, or the raw text following a stray `{{`
        token: String,
    },
    /// A required file has an empty template body
    #[error("template for {file} is empty")]
    EmptyTemplate {
        /// Generated file path
        file: String,
    },
}

/// Failures while turning a file set into archive bytes.
///
/// The rendered files stay available to the caller when packaging fails.
#[derive(Debug, Error)]
pub enum PackageError {
    /// Another packaging operation holds the gate
    #[error("a packaging operation is already in progress")]
    Busy,
    /// `package` was called before anything was generated
    #[error("nothing has been generated yet")]
    NothingGenerated,
    /// The widget name cannot be used as a folder or archive name
    #[error("widget name `{0}` must be a single folder name without path separators or `..`")]
    InvalidName(String),
    #[error("failed to build archive: {0}")]
    Archive(#[from] zip::result::ZipError),
    #[error("failed to write archive entry: {0}")]
    Io(#[from] std::io::Error),
}
