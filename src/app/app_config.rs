use config::Config;
use serde::{Deserialize, Serialize};

use super::CarbonAppError;
use crate::model::graph::RouteQueryDefaults;

/// run configuration naming the data artifacts and query defaults.
///
/// ```toml
/// dataset = "data/shipments.csv"
/// model = "data/emission_model.json"
///
/// [route]
/// max_hops = 5
/// max_results = 5
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    /// path to the shipment history CSV
    pub dataset: String,
    /// path to the trained emission model artifact (JSON)
    pub model: String,
    /// bounds for alternative route enumeration
    #[serde(default)]
    pub route: RouteQueryDefaults,
}

impl AppConfig {
    /// loads run configuration from a TOML file.
    pub fn from_path(config_filepath: &str) -> Result<AppConfig, CarbonAppError> {
        let config_file = config::File::new(config_filepath, config::FileFormat::Toml);
        let config = Config::builder().add_source(config_file).build()?;
        let app_config: AppConfig = config.try_deserialize()?;
        Ok(app_config)
    }
}
