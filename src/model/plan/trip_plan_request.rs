use std::fs::File;
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::{PlanError, PlannedLeg};

/// a user-authored trip plan: the ordered legs to estimate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TripPlanRequest {
    pub legs: Vec<PlannedLeg>,
}

impl TripPlanRequest {
    pub fn new(legs: Vec<PlannedLeg>) -> TripPlanRequest {
        TripPlanRequest { legs }
    }

    /// reads a trip plan request from a JSON file on disk.
    pub fn from_json_path(path: &Path) -> Result<TripPlanRequest, PlanError> {
        let file = File::open(path).map_err(|e| PlanError::RequestFileError {
            path: path.display().to_string(),
            source: e,
        })?;
        let request: TripPlanRequest = serde_json::from_reader(file)?;
        Ok(request)
    }
}
