/// Failure modes of a single detection.
///
/// Both are per-file conditions: the batch driver reports them and moves
/// on to the next path.
#[derive(thiserror::Error, Debug)]
pub enum DetectError {
    /// File open, read, or seek failure (missing file, truncated header).
    #[error("{0}")]
    Io(#[from] std::io::Error),

    /// The bytes at the resolved header offset are not `PE\0\0`.
    #[error("PE signature not found")]
    Format,
}

pub type Result<T> = std::result::Result<T, DetectError>;
