//! [Prix des carburants][1] instantaneous-feed client.
//!
//! [1]: https://data.economie.gouv.fr/explore/dataset/prix-des-carburants-en-france-flux-instantane-v2/

use std::time::Duration;

use itertools::Itertools;
use reqwest::Client;
use serde::Deserialize;

use crate::{
    prelude::*,
    station::{StationId, StationRecord},
};

const BASE_URL: &str = "https://data.economie.gouv.fr/api/explore/v2.1/catalog/datasets/prix-des-carburants-en-france-flux-instantane-v2/records";

/// The feed rejects `in (…)` clauses with more than 20 matches.
const BATCH_SIZE: usize = 20;

pub struct Api(Client);

impl Api {
    pub fn try_new() -> Result<Self> {
        let client = Client::builder()
            .user_agent(concat!("carbualert/", env!("CARGO_PKG_VERSION")))
            .timeout(Duration::from_secs(30))
            .build()?;
        Ok(Self(client))
    }

    /// Fetch the monitored stations, batching the identifiers.
    ///
    /// Results are concatenated in request order. Any failed batch fails the
    /// whole fetch; partial results are never used.
    #[instrument(skip_all, fields(n_ids = ids.len()))]
    pub async fn get_stations(&self, ids: &[StationId]) -> Result<Vec<StationRecord>> {
        let mut stations = Vec::with_capacity(ids.len());
        for batch in ids.chunks(BATCH_SIZE) {
            stations.extend(self.get_records(&where_id_in(batch), batch.len()).await?);
        }
        Ok(stations)
    }

    /// Search stations by postal code (result limit 30).
    pub async fn search_by_postal_code(&self, postal_code: &str) -> Result<Vec<StationRecord>> {
        self.get_records(&format!(r#"cp="{postal_code}""#), 30).await
    }

    /// Search stations by city name (result limit 30).
    pub async fn search_by_city(&self, city: &str) -> Result<Vec<StationRecord>> {
        self.get_records(&format!(r#"search(ville,"{city}")"#), 30).await
    }

    /// Fetch a single station.
    pub async fn get_station(&self, id: StationId) -> Result<Option<StationRecord>> {
        Ok(self.get_records(&format!("id={id}"), 1).await?.into_iter().next())
    }

    #[instrument(skip_all, level = Level::DEBUG, fields(clause = clause, limit = limit))]
    async fn get_records(&self, clause: &str, limit: usize) -> Result<Vec<StationRecord>> {
        let response = self
            .0
            .get(BASE_URL)
            .query(&[("where", clause), ("limit", &limit.to_string())])
            .send()
            .await
            .context("failed to call the catalog")?
            .error_for_status()
            .context("the catalog request failed")?
            .json::<RecordsResponse>()
            .await
            .context("failed to deserialize the catalog response")?;
        Ok(response.results)
    }
}

fn where_id_in(batch: &[StationId]) -> String {
    format!("id in ({})", batch.iter().join(","))
}

#[derive(Deserialize)]
struct RecordsResponse {
    #[serde(default)]
    results: Vec<StationRecord>,
}

#[cfg(test)]
mod tests {
    use itertools::Itertools;

    use super::*;

    #[test]
    fn test_where_id_in() {
        assert_eq!(where_id_in(&[StationId(1), StationId(2), StationId(3)]), "id in (1,2,3)");
    }

    #[test]
    fn test_batching_splits_by_twenty() {
        let ids = (1..=45).map(StationId).collect_vec();
        let sizes = ids.chunks(BATCH_SIZE).map(<[StationId]>::len).collect_vec();
        assert_eq!(sizes, [20, 20, 5]);
    }

    #[test]
    fn test_deserialize_response_envelope() -> Result {
        // language=JSON
        const RESPONSE: &str = r#"
            {
                "total_count": 1,
                "results": [
                    { "id": 59000009, "ville": "Lille", "gazole_prix": 1.759 }
                ]
            }
        "#;
        let response = serde_json::from_str::<RecordsResponse>(RESPONSE)?;
        assert_eq!(response.results.len(), 1);
        assert_eq!(response.results[0].id, StationId(59_000_009));
        Ok(())
    }

    #[tokio::test]
    #[ignore = "makes the API request"]
    async fn test_get_station_ok() -> Result {
        let station = Api::try_new()?.get_station(StationId(59_000_009)).await?;
        assert!(station.is_some_and(|station| station.id == StationId(59_000_009)));
        Ok(())
    }
}
