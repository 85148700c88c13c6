//! Change detection: pure computation over the old snapshot and the fresh
//! fetch. No I/O, no failure modes.

use crate::{
    config::Config,
    fuel::Fuel,
    price::Price,
    snapshot::Snapshot,
    station::StationRecord,
};

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
}

impl Direction {
    pub const fn arrow(self) -> char {
        match self {
            Self::Up => '↑',
            Self::Down => '↓',
        }
    }
}

/// Alert tier of a change event.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Tier {
    /// Ordinary price movement.
    Regular,

    /// The station just became cheaper than the reference station; carries
    /// the reference's current rounded price.
    BeatsReference(Price),
}

/// One detected per-fuel price movement. Lives for a single run.
#[derive(Debug, PartialEq, Eq, bon::Builder)]
pub struct ChangeEvent {
    pub station_name: String,
    pub fuel: Fuel,
    pub direction: Direction,

    /// Previous price, rounded to mills.
    pub old_price: Price,

    /// Current price, rounded to mills.
    pub new_price: Price,

    pub tier: Tier,
}

impl ChangeEvent {
    #[must_use]
    pub const fn beats_reference(&self) -> bool {
        matches!(self.tier, Tier::BeatsReference(_))
    }
}

/// Diff the fetched stations against the previous snapshot.
///
/// Events come out in station fetch order, then fuel declaration order,
/// never sorted by magnitude or name. Stations without a baseline entry emit
/// nothing: their first sighting only seeds the next snapshot. A fuel absent
/// on either side is skipped silently.
pub fn detect_changes(
    old: &Snapshot,
    new: &Snapshot,
    records: &[StationRecord],
    config: &Config,
) -> Vec<ChangeEvent> {
    let mut events = Vec::new();
    for record in records {
        let Some(old_prices) = old.station(record.id) else {
            continue;
        };
        for fuel in Fuel::ALL {
            let Some(old_price) = old_prices.get(&fuel).copied() else {
                continue;
            };
            let Some(new_price) = new.price(record.id, fuel) else {
                continue;
            };
            let (old_price, new_price) = (old_price.round_to_mills(), new_price.round_to_mills());
            if old_price == new_price {
                continue;
            }
            let direction = if new_price > old_price { Direction::Up } else { Direction::Down };
            events.push(
                ChangeEvent::builder()
                    .station_name(config.display_name(record))
                    .fuel(fuel)
                    .direction(direction)
                    .old_price(old_price)
                    .new_price(new_price)
                    .tier(tier_of(new, record, fuel, new_price, config))
                    .build(),
            );
        }
    }
    events
}

/// An event beats the reference when a reference station is configured, the
/// changed station is not the reference itself, and the station's new rounded
/// price is strictly below the reference's *current* rounded price for that
/// fuel. A reference without that fuel suppresses only the marking.
fn tier_of(
    new: &Snapshot,
    record: &StationRecord,
    fuel: Fuel,
    new_price: Price,
    config: &Config,
) -> Tier {
    config
        .reference_station_id
        .filter(|reference_id| *reference_id != record.id)
        .and_then(|reference_id| new.price(reference_id, fuel))
        .map(Price::round_to_mills)
        .filter(|reference_price| new_price < *reference_price)
        .map_or(Tier::Regular, Tier::BeatsReference)
}
