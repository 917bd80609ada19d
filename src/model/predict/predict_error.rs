use thiserror::Error;

#[derive(Error, Debug)]
pub enum PredictError {
    #[error("unknown transport mode '{label}', expected one of: {}", .known.join(", "))]
    UnknownCategory { label: String, known: Vec<String> },
    #[error("invalid emission model artifact: {0}")]
    InvalidArtifact(String),
    #[error("failure opening emission model artifact {path}: {source}")]
    ArtifactFileError { path: String, source: std::io::Error },
    #[error("failure decoding emission model artifact: {source}")]
    ArtifactJsonError {
        #[from]
        source: serde_json::Error,
    },
}
