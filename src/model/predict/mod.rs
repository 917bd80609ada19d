mod emission_predictor;
mod label_encoder;
mod linear_emission_model;
mod predict_error;

pub use emission_predictor::EmissionPredictor;
pub use label_encoder::LabelEncoder;
pub use linear_emission_model::LinearEmissionModel;
pub use predict_error::PredictError;
