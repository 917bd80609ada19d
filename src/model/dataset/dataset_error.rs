use thiserror::Error;

#[derive(Error, Debug)]
pub enum DatasetError {
    #[error("failure opening shipment dataset {path}: {source}")]
    DatasetFileError { path: String, source: std::io::Error },
    #[error("shipment dataset is missing required column '{0}'")]
    MissingColumn(String),
    #[error("failure reading shipment records: {source}")]
    CsvError {
        #[from]
        source: csv::Error,
    },
}
