//! Partitions change events into notification tiers and renders the toast
//! bodies.

use std::time::Duration;

use itertools::Itertools;

use crate::detect::{ChangeEvent, Tier};

/// At most this many detail lines per toast; the rest collapses into a
/// single `... et N autre(s)` line.
const MAX_LINES: usize = 5;

/// A toast ready for delivery.
#[derive(Debug, bon::Builder)]
pub struct Notice {
    pub title: &'static str,
    pub body: String,
    pub timeout: Duration,
    pub critical: bool,
}

/// Change events partitioned by alert tier, detector order preserved.
#[must_use]
pub struct Digest {
    pub regular: Vec<ChangeEvent>,
    pub beats: Vec<ChangeEvent>,
}

impl Digest {
    pub fn new(events: Vec<ChangeEvent>) -> Self {
        let (beats, regular) = events.into_iter().partition(ChangeEvent::beats_reference);
        Self { regular, beats }
    }

    /// Zero, one, or two notices: a quiet one for ordinary movements and a
    /// louder one for stations that just undercut the reference.
    #[must_use]
    pub fn notices(&self) -> Vec<Notice> {
        let mut notices = Vec::new();
        if !self.regular.is_empty() {
            notices.push(
                Notice::builder()
                    .title("Carbu Alert - Changement de prix")
                    .body(format_body(&self.regular, regular_line))
                    .timeout(Duration::from_secs(10))
                    .critical(false)
                    .build(),
            );
        }
        if !self.beats.is_empty() {
            notices.push(
                Notice::builder()
                    .title("CarbuAlert - Moins cher que votre ref !")
                    .body(format_body(&self.beats, beats_line))
                    .timeout(Duration::from_secs(30))
                    .critical(true)
                    .build(),
            );
        }
        notices
    }
}

fn format_body(events: &[ChangeEvent], line: impl Fn(&ChangeEvent) -> String) -> String {
    let mut lines = events.iter().take(MAX_LINES).map(line).collect_vec();
    if events.len() > MAX_LINES {
        lines.push(format!("... et {} autre(s)", events.len() - MAX_LINES));
    }
    lines.join("\n")
}

fn regular_line(event: &ChangeEvent) -> String {
    format!(
        "{} {}: {} -> {} ({})",
        event.direction.arrow(),
        event.fuel,
        event.old_price,
        event.new_price,
        event.station_name,
    )
}

fn beats_line(event: &ChangeEvent) -> String {
    match event.tier {
        Tier::BeatsReference(reference_price) => format!(
            "↓ {}: {} < ref {} ({})",
            event.fuel, event.new_price, reference_price, event.station_name,
        ),
        Tier::Regular => regular_line(event),
    }
}
