use std::fs::File;
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::{EmissionPredictor, LabelEncoder, PredictError};

/// linear regression over distance, weight and transport mode, exported
/// to a JSON artifact after training.
///
/// prediction follows the trained design matrix: one continuous term
/// each for distance and weight plus an additive per-mode effect chosen
/// through the label encoder. estimates are floored at zero since a
/// negative emission is an artifact of extrapolation, not a physical
/// outcome.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinearEmissionModel {
    pub intercept: f64,
    pub distance_coef: f64,
    pub weight_coef: f64,
    /// additive effect per transport mode, parallel to the encoder classes
    pub mode_effects: Vec<f64>,
    pub encoder: LabelEncoder,
}

impl LinearEmissionModel {
    pub fn new(
        intercept: f64,
        distance_coef: f64,
        weight_coef: f64,
        mode_effects: Vec<f64>,
        encoder: LabelEncoder,
    ) -> Result<LinearEmissionModel, PredictError> {
        let model = LinearEmissionModel {
            intercept,
            distance_coef,
            weight_coef,
            mode_effects,
            encoder,
        };
        model.validate()?;
        Ok(model)
    }

    /// reads a trained model artifact from a JSON file on disk.
    pub fn from_json_path(path: &Path) -> Result<LinearEmissionModel, PredictError> {
        let file = File::open(path).map_err(|e| PredictError::ArtifactFileError {
            path: path.display().to_string(),
            source: e,
        })?;
        let model: LinearEmissionModel = serde_json::from_reader(file)?;
        model.validate()?;
        Ok(model)
    }

    /// checks the structural invariants a trained artifact must satisfy.
    /// deserialization bypasses the constructor, so loading re-validates.
    fn validate(&self) -> Result<(), PredictError> {
        self.encoder.validate()?;
        if self.mode_effects.len() != self.encoder.len() {
            return Err(PredictError::InvalidArtifact(format!(
                "model carries {} mode effects for {} encoder classes",
                self.mode_effects.len(),
                self.encoder.len()
            )));
        }
        Ok(())
    }
}

impl EmissionPredictor for LinearEmissionModel {
    fn predict(
        &self,
        distance_km: f64,
        weight_tons: f64,
        mode: &str,
    ) -> Result<f64, PredictError> {
        let code = self.encoder.encode(mode)?;
        let mode_effect = self.mode_effects.get(code).ok_or_else(|| {
            PredictError::InvalidArtifact(format!(
                "no mode effect at code {code} for transport mode '{mode}'"
            ))
        })?;
        let estimate = self.intercept
            + self.distance_coef * distance_km
            + self.weight_coef * weight_tons
            + mode_effect;
        Ok(estimate.max(0.0))
    }

    fn modes(&self) -> &[String] {
        self.encoder.classes()
    }
}
