use thiserror::Error;

/// Domain filter error types.
///
/// The matching core itself never fails: invalid patterns are skipped during
/// construction and malformed queries are treated as non-matches. Errors only
/// arise at the edges, when loading a match file or driving I/O.
#[derive(Error, Debug)]
pub enum FilterError {
    #[error("Invalid domain name: {0}")]
    InvalidDomain(String),

    #[error("Failed to read match file '{path}': {source}")]
    MatchFile {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, FilterError>;
