use std::{collections::BTreeMap, path::Path};

use serde::{Deserialize, Serialize};

use crate::{
    fuel::Fuel,
    prelude::*,
    price::Price,
    station::{StationId, StationRecord},
};

/// Prices of one station, rounded to mills, in fuel declaration order.
pub type StationPrices = BTreeMap<Fuel, Price>;

/// Last observed prices per station, the sole durable state
/// (`last_prices.json`).
///
/// Loaded once at run start and overwritten after every successful fetch,
/// whether or not anything changed.
#[must_use]
#[derive(Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Snapshot(BTreeMap<StationId, StationPrices>);

impl Snapshot {
    pub fn from_records(records: &[StationRecord]) -> Self {
        Self(records.iter().map(|record| (record.id, record.prices())).collect())
    }

    #[must_use]
    pub fn station(&self, id: StationId) -> Option<&StationPrices> {
        self.0.get(&id)
    }

    #[must_use]
    pub fn price(&self, id: StationId, fuel: Fuel) -> Option<Price> {
        self.0.get(&id).and_then(|prices| prices.get(&fuel)).copied()
    }

    /// Read the snapshot, falling back to an empty baseline.
    ///
    /// A missing or corrupt file means first-run semantics, not an error.
    #[instrument(skip_all, fields(path = %path.display()))]
    pub fn read_from(path: &Path) -> Self {
        Self::read_fallibly_from(path).unwrap_or_else(|error| {
            warn!(error = %format!("{error:#}"), "failed to load the snapshot, starting empty");
            Self::default()
        })
    }

    fn read_fallibly_from(path: &Path) -> Result<Self> {
        if path.is_file() {
            Ok(serde_json::from_str(&std::fs::read_to_string(path)?)?)
        } else {
            Ok(Self::default())
        }
    }

    /// Persist the snapshot via a sibling temporary file and a rename: either
    /// the write completes or the previous snapshot stays in place.
    #[instrument(skip_all, fields(path = %path.display()))]
    pub fn write_to(&self, path: &Path) -> Result {
        let temporary_path = path.with_extension("tmp");
        std::fs::write(&temporary_path, serde_json::to_vec_pretty(self)?)
            .with_context(|| format!("failed to write `{}`", temporary_path.display()))?;
        std::fs::rename(&temporary_path, path)
            .with_context(|| format!("failed to move the snapshot to `{}`", path.display()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trips_the_file_shape() -> Result {
        // language=JSON
        const SNAPSHOT: &str = r#"{ "59000009": { "gazole_prix": 1.759, "e10_prix": 1.809 } }"#;
        let snapshot = serde_json::from_str::<Snapshot>(SNAPSHOT)?;
        assert_eq!(snapshot.price(StationId(59_000_009), Fuel::Gazole), Some(Price::from(1.759)));
        assert_eq!(snapshot.price(StationId(59_000_009), Fuel::Sp95), None);
        assert_eq!(snapshot.price(StationId(1), Fuel::Gazole), None);

        let reparsed = serde_json::from_str::<Snapshot>(&serde_json::to_string(&snapshot)?)?;
        assert_eq!(reparsed, snapshot);
        Ok(())
    }

    #[test]
    fn test_from_records_rounds_and_skips_absent() -> Result {
        // language=JSON
        const RECORD: &str = r#"{ "id": 1, "gazole_prix": 1.7590001, "e85_prix": null }"#;
        let records = vec![serde_json::from_str::<StationRecord>(RECORD)?];
        let snapshot = Snapshot::from_records(&records);
        assert_eq!(snapshot.price(StationId(1), Fuel::Gazole), Some(Price::from(1.759)));
        assert_eq!(snapshot.price(StationId(1), Fuel::E85), None);
        Ok(())
    }

    #[test]
    fn test_write_and_read_back() -> Result {
        let path = std::env::temp_dir().join("carbualert-snapshot-test.json");
        // language=JSON
        const RECORD: &str = r#"{ "id": 42, "sp98_prix": 1.999 }"#;
        let snapshot = Snapshot::from_records(&[serde_json::from_str::<StationRecord>(RECORD)?]);
        snapshot.write_to(&path)?;
        let read_back = Snapshot::read_from(&path);
        std::fs::remove_file(&path)?;
        assert_eq!(read_back, snapshot);
        Ok(())
    }

    #[test]
    fn test_missing_file_reads_empty() {
        let snapshot = Snapshot::read_from(Path::new("definitely-not-there.json"));
        assert_eq!(snapshot, Snapshot::default());
    }
}
