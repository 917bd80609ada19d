use thiserror::Error;

use crate::model::dataset::DatasetError;
use crate::model::graph::RouteGraphError;
use crate::model::plan::PlanError;
use crate::model::predict::PredictError;

#[derive(Error, Debug)]
pub enum CarbonAppError {
    #[error("failure reading run configuration: {source}")]
    ConfigurationError {
        #[from]
        source: config::ConfigError,
    },
    #[error("failure loading shipment dataset: {source}")]
    DatasetError {
        #[from]
        source: DatasetError,
    },
    #[error("failure running emission model: {source}")]
    PredictError {
        #[from]
        source: PredictError,
    },
    #[error("failure querying shipment graph: {source}")]
    RouteError {
        #[from]
        source: RouteGraphError,
    },
    #[error("failure building trip plan: {source}")]
    PlanError {
        #[from]
        source: PlanError,
    },
    #[error("output file {0} exists, re-run with --overwrite to replace it")]
    OutputFileExists(String),
    #[error("failure writing to file {0}: {1}")]
    CsvWriteError(String, csv::Error),
    #[error("failure writing to file {0}: {1}")]
    OutputIoError(String, std::io::Error),
}
