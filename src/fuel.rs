use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

/// Fuel types of the national feed, in the feed's declaration order.
///
/// The set is closed: the feed has carried exactly these six since the v2
/// dataset was published. Serde names reuse the feed's price field names, so
/// the snapshot file keeps the `<fuel>_prix` shape.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Fuel {
    #[serde(rename = "gazole_prix")]
    Gazole,

    #[serde(rename = "sp95_prix")]
    Sp95,

    #[serde(rename = "sp98_prix")]
    Sp98,

    #[serde(rename = "e10_prix")]
    E10,

    #[serde(rename = "e85_prix")]
    E85,

    #[serde(rename = "gplc_prix")]
    Gplc,
}

impl Fuel {
    /// All fuels, in declaration order. Change events are emitted in this order.
    pub const ALL: [Self; 6] =
        [Self::Gazole, Self::Sp95, Self::Sp98, Self::E10, Self::E85, Self::Gplc];

    /// Human label, as printed on the pumps.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Gazole => "Gazole",
            Self::Sp95 => "SP95",
            Self::Sp98 => "SP98",
            Self::E10 => "E10",
            Self::E85 => "E85",
            Self::Gplc => "GPLc",
        }
    }
}

impl Display for Fuel {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prelude::*;

    #[test]
    fn test_snapshot_keys_match_the_feed() -> Result {
        assert_eq!(serde_json::to_string(&Fuel::Gazole)?, r#""gazole_prix""#);
        assert_eq!(serde_json::from_str::<Fuel>(r#""gplc_prix""#)?, Fuel::Gplc);
        Ok(())
    }
}
