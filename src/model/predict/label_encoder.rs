use itertools::Itertools;
use serde::{Deserialize, Serialize};

use super::PredictError;

/// maps categorical labels to the integer codes used at training time.
///
/// the class list is positional: code `i` names `classes[i]`. a label
/// absent from the list is an error rather than a guess, mirroring the
/// fitted encoder the regression model was trained against.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabelEncoder {
    classes: Vec<String>,
}

impl LabelEncoder {
    pub fn new(classes: Vec<String>) -> Result<LabelEncoder, PredictError> {
        let encoder = LabelEncoder { classes };
        encoder.validate()?;
        Ok(encoder)
    }

    /// checks the invariants an encoder read from an artifact must hold.
    pub fn validate(&self) -> Result<(), PredictError> {
        if self.classes.is_empty() {
            return Err(PredictError::InvalidArtifact(String::from(
                "label encoder has no classes",
            )));
        }
        let n_unique = self.classes.iter().unique().count();
        if n_unique != self.classes.len() {
            return Err(PredictError::InvalidArtifact(format!(
                "label encoder has duplicate classes: [{}]",
                self.classes.iter().join(", ")
            )));
        }
        Ok(())
    }

    /// the integer code for a label, failing on labels not seen at
    /// training time.
    pub fn encode(&self, label: &str) -> Result<usize, PredictError> {
        self.classes
            .iter()
            .position(|class| class == label)
            .ok_or_else(|| PredictError::UnknownCategory {
                label: String::from(label),
                known: self.classes.clone(),
            })
    }

    /// the label for an integer code, if the code is in range.
    pub fn decode(&self, code: usize) -> Option<&str> {
        self.classes.get(code).map(|class| class.as_str())
    }

    pub fn classes(&self) -> &[String] {
        &self.classes
    }

    pub fn len(&self) -> usize {
        self.classes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }
}
