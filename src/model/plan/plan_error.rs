use thiserror::Error;

use crate::model::predict::PredictError;

#[derive(Error, Debug)]
pub enum PlanError {
    #[error("trip plan has no legs")]
    EmptyPlan,
    #[error("leg {leg} has no origin and no previous leg to continue from")]
    MissingOrigin { leg: usize },
    #[error("leg {leg} departs from '{origin}' but the previous leg arrived at '{expected}'")]
    DiscontinuousLeg {
        leg: usize,
        origin: String,
        expected: String,
    },
    #[error("leg {leg} ({origin} -> {destination} via {mode}) has no distance and no matching shipment record to borrow one from")]
    UnknownDistance {
        leg: usize,
        origin: String,
        destination: String,
        mode: String,
    },
    #[error("failure predicting emissions for leg {leg}: {source}")]
    LegPredictionError { leg: usize, source: PredictError },
    #[error("failure opening trip plan request {path}: {source}")]
    RequestFileError { path: String, source: std::io::Error },
    #[error("failure decoding trip plan request: {source}")]
    RequestJsonError {
        #[from]
        source: serde_json::Error,
    },
}
