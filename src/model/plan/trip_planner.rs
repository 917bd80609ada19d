use std::sync::Arc;

use super::{LegResult, PlanError, PlanSummary, TripPlanRequest};
use crate::model::dataset::ShipmentDataset;
use crate::model::predict::EmissionPredictor;

/// resolves trip plan requests into per-leg emission estimates.
///
/// legs resolve in order: a leg without an origin continues from the
/// previous leg's destination, and a leg without a distance borrows the
/// first matching record from the shipment history. the dataset and
/// predictor are injected once and owned by the caller.
pub struct TripPlanner {
    dataset: Arc<ShipmentDataset>,
    predictor: Arc<dyn EmissionPredictor>,
}

impl TripPlanner {
    pub fn new(
        dataset: Arc<ShipmentDataset>,
        predictor: Arc<dyn EmissionPredictor>,
    ) -> TripPlanner {
        TripPlanner { dataset, predictor }
    }

    /// estimates every leg of the request and sums the totals.
    pub fn plan(&self, request: &TripPlanRequest) -> Result<PlanSummary, PlanError> {
        if request.legs.is_empty() {
            return Err(PlanError::EmptyPlan);
        }

        let mut legs: Vec<LegResult> = Vec::with_capacity(request.legs.len());
        let mut total_emissions_kgco2e = 0.0;
        let mut previous_arrival: Option<String> = None;

        for (index, requested) in request.legs.iter().enumerate() {
            let leg = index + 1;
            let origin = resolve_origin(
                leg,
                requested.origin.as_deref(),
                previous_arrival.as_deref(),
            )?;
            let distance_km = match requested.distance_km {
                Some(distance) => distance,
                None => self
                    .dataset
                    .find_distance(&origin, &requested.destination, &requested.mode)
                    .ok_or_else(|| PlanError::UnknownDistance {
                        leg,
                        origin: origin.clone(),
                        destination: requested.destination.clone(),
                        mode: requested.mode.clone(),
                    })?,
            };
            let emissions_kgco2e = self
                .predictor
                .predict(distance_km, requested.weight_tons, &requested.mode)
                .map_err(|source| PlanError::LegPredictionError { leg, source })?;

            total_emissions_kgco2e += emissions_kgco2e;
            legs.push(LegResult {
                leg,
                origin,
                destination: requested.destination.clone(),
                mode: requested.mode.clone(),
                distance_km,
                weight_tons: requested.weight_tons,
                emissions_kgco2e,
            });
            previous_arrival = Some(requested.destination.clone());
        }

        Ok(PlanSummary {
            legs,
            total_emissions_kgco2e,
        })
    }
}

/// applies the chaining rules to determine where a leg departs from.
/// an explicit origin must agree with the previous arrival when one exists.
fn resolve_origin(
    leg: usize,
    origin: Option<&str>,
    previous_arrival: Option<&str>,
) -> Result<String, PlanError> {
    match (origin, previous_arrival) {
        (Some(origin), Some(previous)) if origin != previous => {
            Err(PlanError::DiscontinuousLeg {
                leg,
                origin: String::from(origin),
                expected: String::from(previous),
            })
        }
        (Some(origin), _) => Ok(String::from(origin)),
        (None, Some(previous)) => Ok(String::from(previous)),
        (None, None) => Err(PlanError::MissingOrigin { leg }),
    }
}
