//! Error types for the export client.

#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// The HTTP request could not be sent or its body could not be read.
    #[error("request failed")]
    RequestFailed,
    /// The registry answered with a non-success status code.
    #[error("request failed with status {status}")]
    HttpStatus { status: u16, body: String },
    /// The export body could not be decoded as CSV.
    #[error("csv decode failed: {0}")]
    Csv(#[from] csv::Error),
    /// The export body did not have the expected shape.
    #[error("malformed export: {0}")]
    MalformedExport(String),
}
