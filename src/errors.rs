use thiserror::Error;

/// Crate error type. The engine itself never fails on continuous
/// sensor input (bad samples are discarded), errors only arise from
/// the destination catalog.
#[derive(Debug, Error)]
pub enum Error {
    #[cfg(feature = "catalog")]
    #[error("catalog i/o error: {0}")]
    CatalogIo(#[from] std::io::Error),
    #[cfg(feature = "catalog")]
    #[error("catalog parsing error: {0}")]
    CatalogParsing(#[from] serde_json::Error),
    #[error("unknown destination \"{0}\"")]
    UnknownDestination(String),
}
