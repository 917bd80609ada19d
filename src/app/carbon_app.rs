use std::path::Path;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use itertools::Itertools;
use ordered_float::OrderedFloat;

use super::{export, AppConfig, CarbonAppError};
use crate::model::dataset::ShipmentDataset;
use crate::model::graph::{ModeFilter, RouteGraphError, RouteGraphService};
use crate::model::plan::{TripPlanRequest, TripPlanner};
use crate::model::predict::{EmissionPredictor, LinearEmissionModel, PredictError};

/// command line tool for emission-aware shipment routing and trip planning
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct CarbonApp {
    /// path to a TOML run configuration
    #[arg(long, default_value = "carbonroute.toml")]
    pub config: String,
    #[command(subcommand)]
    pub op: CarbonOperation,
}

#[derive(Debug, Clone, Subcommand)]
pub enum CarbonOperation {
    /// estimate the carbon emissions of a single shipment
    Predict {
        /// shipping distance in kilometers
        #[arg(long)]
        distance_km: f64,
        /// shipment weight in metric tons
        #[arg(long)]
        weight_tons: f64,
        /// transport mode label, e.g. 'Road'
        #[arg(long)]
        mode: String,
    },
    /// find the emission-minimizing route between two locations
    Route {
        /// location the route departs from
        #[arg(long)]
        start: String,
        /// location the route arrives at
        #[arg(long)]
        end: String,
        /// restrict the shipment graph to one transport mode
        #[arg(long)]
        mode: Option<String>,
        /// bound on hops when enumerating alternatives
        #[arg(long)]
        max_hops: Option<usize>,
        /// bound on the number of alternatives reported
        #[arg(long)]
        max_results: Option<usize>,
        /// write the route table to this CSV (or .csv.gz) file
        #[arg(long)]
        output: Option<String>,
        /// replace the output file if it exists
        #[arg(long, default_value_t = false)]
        overwrite: bool,
    },
    /// estimate emissions for a multi-leg trip plan
    Plan {
        /// path to a JSON trip plan request
        #[arg(long)]
        request: String,
        /// write per-leg results to this CSV (or .csv.gz) file
        #[arg(long)]
        output: Option<String>,
        /// replace the output file if it exists
        #[arg(long, default_value_t = false)]
        overwrite: bool,
    },
    /// list the locations and transport modes the other operations accept
    Summary,
}

impl CarbonApp {
    pub fn run(self) -> Result<(), CarbonAppError> {
        let config = AppConfig::from_path(&self.config)?;
        self.op.run(&config)
    }
}

impl CarbonOperation {
    pub fn run(self, config: &AppConfig) -> Result<(), CarbonAppError> {
        match self {
            CarbonOperation::Predict {
                distance_km,
                weight_tons,
                mode,
            } => run_predict(config, distance_km, weight_tons, &mode),
            CarbonOperation::Route {
                start,
                end,
                mode,
                max_hops,
                max_results,
                output,
                overwrite,
            } => run_route(
                config, &start, &end, mode, max_hops, max_results, output, overwrite,
            ),
            CarbonOperation::Plan {
                request,
                output,
                overwrite,
            } => run_plan(config, &request, output, overwrite),
            CarbonOperation::Summary => run_summary(config),
        }
    }
}

fn run_predict(
    config: &AppConfig,
    distance_km: f64,
    weight_tons: f64,
    mode: &str,
) -> Result<(), CarbonAppError> {
    let model = LinearEmissionModel::from_json_path(Path::new(&config.model))?;
    match model.predict(distance_km, weight_tons, mode) {
        Ok(estimate) => {
            println!("estimated carbon emissions: {estimate:.2} kg CO2e");
            Ok(())
        }
        // a label the model was not trained on is a user input problem,
        // not a failure of the run
        Err(e @ PredictError::UnknownCategory { .. }) => {
            println!("{e}");
            Ok(())
        }
        Err(e) => Err(e.into()),
    }
}

#[allow(clippy::too_many_arguments)]
fn run_route(
    config: &AppConfig,
    start: &str,
    end: &str,
    mode: Option<String>,
    max_hops: Option<usize>,
    max_results: Option<usize>,
    output: Option<String>,
    overwrite: bool,
) -> Result<(), CarbonAppError> {
    let dataset = Arc::new(ShipmentDataset::from_csv_path(Path::new(&config.dataset))?);
    log::info!(
        "loaded {} shipment records across {} origins",
        dataset.len(),
        dataset.origins().len()
    );
    let service = RouteGraphService::new(dataset, config.route);
    let filter = ModeFilter::from_mode(mode);

    let comparison = match service.compare(start, end, &filter, max_hops, max_results) {
        Ok(comparison) => comparison,
        Err(RouteGraphError::NoPath { start, end }) => {
            println!("no available route between '{start}' and '{end}' ({filter})");
            return Ok(());
        }
        Err(e) => return Err(e.into()),
    };

    println!("optimal route (min co2): {}", comparison.best);
    println!("  total distance:  {:.2} km", comparison.best.distance_km);
    println!(
        "  total emissions: {:.2} kg CO2e",
        comparison.best.emissions_kgco2e
    );

    if comparison.alternatives.is_empty() {
        println!("no alternative routes found");
    } else {
        // the enumeration order carries no meaning, rank for display
        let ranked = comparison
            .alternatives
            .iter()
            .sorted_by_key(|route| OrderedFloat(route.emissions_kgco2e))
            .collect_vec();
        println!(
            "alternative routes (max {} hops):",
            max_hops.unwrap_or(config.route.max_hops)
        );
        for route in ranked.iter() {
            println!(
                "  {route} [{:.2} km, {:.2} kg CO2e]",
                route.distance_km, route.emissions_kgco2e
            );
        }
    }

    if let Some(output) = output {
        export::write_routes_csv(&comparison, Path::new(&output), overwrite)?;
        log::info!("wrote route table to {output}");
    }
    Ok(())
}

fn run_plan(
    config: &AppConfig,
    request_filepath: &str,
    output: Option<String>,
    overwrite: bool,
) -> Result<(), CarbonAppError> {
    let dataset = Arc::new(ShipmentDataset::from_csv_path(Path::new(&config.dataset))?);
    let model = Arc::new(LinearEmissionModel::from_json_path(Path::new(
        &config.model,
    ))?);
    let planner = TripPlanner::new(dataset, model);

    let request = TripPlanRequest::from_json_path(Path::new(request_filepath))?;
    let summary = planner.plan(&request)?;

    for leg in summary.legs.iter() {
        println!(
            "leg {}: {} -> {} via {} | {:.2} km | {:.2} kg CO2e",
            leg.leg, leg.origin, leg.destination, leg.mode, leg.distance_km, leg.emissions_kgco2e
        );
    }
    println!(
        "total trip emissions: {:.2} kg CO2e over {:.2} km",
        summary.total_emissions_kgco2e,
        summary.total_distance_km()
    );

    if let Some(output) = output {
        export::write_plan_csv(&summary, Path::new(&output), overwrite)?;
        log::info!("wrote trip plan results to {output}");
    }
    Ok(())
}

/// prints the values route and plan queries select over: locations from
/// the shipment history, transport modes from the trained model.
fn run_summary(config: &AppConfig) -> Result<(), CarbonAppError> {
    let dataset = ShipmentDataset::from_csv_path(Path::new(&config.dataset))?;
    let model = LinearEmissionModel::from_json_path(Path::new(&config.model))?;

    println!("shipment records: {}", dataset.len());
    println!("origins:          {}", dataset.origins().join(", "));
    println!("destinations:     {}", dataset.destinations().join(", "));
    println!("dataset modes:    {}", dataset.modes().join(", "));
    println!("model modes:      {}", model.modes().join(", "));
    Ok(())
}
