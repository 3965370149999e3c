use thiserror::Error;

/// Call failures are reported to the operator and swallowed once the loop is
/// running; only a failed startup connect ends the run.
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("{}", .0.message())]
    Transport(#[from] tonic::Status),
    #[error("connection failed: {0}")]
    Connect(#[from] tonic::transport::Error),
    #[error("console read failed: {0}")]
    Io(#[from] std::io::Error),
}
