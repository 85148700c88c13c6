use std::collections::BTreeMap;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::{fuel::Fuel, price::Price};

/// Station identifier of the national feed.
#[must_use]
#[derive(
    Copy,
    Clone,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
    derive_more::From,
    derive_more::FromStr,
)]
#[serde(transparent)]
pub struct StationId(pub u64);

/// One station record of the instantaneous feed.
///
/// Transient: fetched every run, only the prices survive into the snapshot.
#[derive(Debug, Deserialize)]
pub struct StationRecord {
    pub id: StationId,

    #[serde(default)]
    pub adresse: Option<String>,

    #[serde(default)]
    pub cp: Option<String>,

    #[serde(default)]
    pub ville: Option<String>,

    #[serde(default)]
    pub gazole_prix: Option<Price>,

    #[serde(default)]
    pub gazole_maj: Option<String>,

    #[serde(default)]
    pub sp95_prix: Option<Price>,

    #[serde(default)]
    pub sp95_maj: Option<String>,

    #[serde(default)]
    pub sp98_prix: Option<Price>,

    #[serde(default)]
    pub sp98_maj: Option<String>,

    #[serde(default)]
    pub e10_prix: Option<Price>,

    #[serde(default)]
    pub e10_maj: Option<String>,

    #[serde(default)]
    pub e85_prix: Option<Price>,

    #[serde(default)]
    pub e85_maj: Option<String>,

    #[serde(default)]
    pub gplc_prix: Option<Price>,

    #[serde(default)]
    pub gplc_maj: Option<String>,
}

impl StationRecord {
    /// Raw price of the given fuel, if the station sells and reported it.
    #[must_use]
    pub fn price(&self, fuel: Fuel) -> Option<Price> {
        match fuel {
            Fuel::Gazole => self.gazole_prix,
            Fuel::Sp95 => self.sp95_prix,
            Fuel::Sp98 => self.sp98_prix,
            Fuel::E10 => self.e10_prix,
            Fuel::E85 => self.e85_prix,
            Fuel::Gplc => self.gplc_prix,
        }
    }

    /// Last price update of the given fuel.
    ///
    /// The feed stamps French wall-clock time with a bogus `+00:00` offset,
    /// so the offset is stripped rather than honoured.
    #[must_use]
    pub fn updated_at(&self, fuel: Fuel) -> Option<NaiveDateTime> {
        let raw = match fuel {
            Fuel::Gazole => self.gazole_maj.as_deref(),
            Fuel::Sp95 => self.sp95_maj.as_deref(),
            Fuel::Sp98 => self.sp98_maj.as_deref(),
            Fuel::E10 => self.e10_maj.as_deref(),
            Fuel::E85 => self.e85_maj.as_deref(),
            Fuel::Gplc => self.gplc_maj.as_deref(),
        }?;
        let naive = raw.trim_end_matches('Z');
        let bytes = naive.as_bytes();
        let naive = if bytes.len() > 6 && matches!(bytes[bytes.len() - 6], b'+' | b'-') {
            &naive[..bytes.len() - 6]
        } else {
            naive
        };
        NaiveDateTime::parse_from_str(naive, "%Y-%m-%dT%H:%M:%S").ok()
    }

    /// Present prices, rounded to mills, keyed by fuel in declaration order.
    #[must_use]
    pub fn prices(&self) -> BTreeMap<Fuel, Price> {
        Fuel::ALL
            .into_iter()
            .filter_map(|fuel| Some((fuel, self.price(fuel)?.round_to_mills())))
            .collect()
    }

    /// `<postal code> <city>`, for the lookup tables.
    #[must_use]
    pub fn location(&self) -> String {
        format!("{} {}", self.cp.as_deref().unwrap_or_default(), self.ville.as_deref().unwrap_or_default())
            .trim()
            .to_string()
    }
}
