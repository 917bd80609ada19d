mod dataset_error;
mod shipment_dataset;
mod shipment_record;

pub use dataset_error::DatasetError;
pub use shipment_dataset::ShipmentDataset;
pub use shipment_record::ShipmentRecord;
