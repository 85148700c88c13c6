use std::{collections::HashMap, path::Path};

use serde::Deserialize;

use crate::{prelude::*, station::{StationId, StationRecord}};

/// Monitored stations (`config.json`).
///
/// Read-only for the watcher: one instance is loaded at startup and passed
/// down to every component. A missing or unparseable file is fatal.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    pub station_ids: Vec<StationId>,

    #[serde(default)]
    pub station_names: HashMap<StationId, String>,

    #[serde(default)]
    pub reference_station_id: Option<StationId>,
}

impl Config {
    #[instrument(skip_all, fields(path = %path.display()))]
    pub fn read_from(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read the configuration from `{}`", path.display()))?;
        serde_json::from_str(&contents)
            .with_context(|| format!("failed to parse the configuration at `{}`", path.display()))
    }

    /// Display name of a station: configured override → address → city → raw
    /// identifier. Empty strings count as absent.
    #[must_use]
    pub fn display_name(&self, record: &StationRecord) -> String {
        let non_empty = |name: &&str| !name.is_empty();
        self.station_names
            .get(&record.id)
            .map(String::as_str)
            .filter(non_empty)
            .or_else(|| record.adresse.as_deref().filter(non_empty))
            .or_else(|| record.ville.as_deref().filter(non_empty))
            .map_or_else(|| record.id.to_string(), str::to_string)
    }
}
