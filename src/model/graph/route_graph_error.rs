use thiserror::Error;

#[derive(Error, Debug)]
pub enum RouteGraphError {
    #[error("no available route between '{start}' and '{end}'")]
    NoPath { start: String, end: String },
    #[error("{0}")]
    InternalError(String),
}
