use comfy_table::{Attribute, Cell, CellAlignment, Table, modifiers, presets};

use crate::{fuel::Fuel, station::StationRecord};

fn new_table() -> Table {
    let mut table = Table::new();
    table.load_preset(presets::UTF8_FULL_CONDENSED).apply_modifier(modifiers::UTF8_ROUND_CORNERS);
    table.enforce_styling();
    table
}

fn price_cell(record: &StationRecord, fuel: Fuel) -> Cell {
    record.price(fuel).map_or_else(
        || Cell::new("—").add_attribute(Attribute::Dim),
        |price| Cell::new(price.round_to_mills()).set_alignment(CellAlignment::Right),
    )
}

/// Search results, one station per row.
pub fn build_search_table(records: &[StationRecord]) -> Table {
    let mut table = new_table();
    table.set_header(
        ["ID", "Adresse", "Ville"]
            .into_iter()
            .map(Cell::new)
            .chain(Fuel::ALL.into_iter().map(|fuel| Cell::new(fuel.label())))
            .collect::<Vec<_>>(),
    );
    for record in records {
        table.add_row(
            [
                Cell::new(record.id),
                Cell::new(record.adresse.as_deref().unwrap_or("—")),
                Cell::new(record.location()),
            ]
            .into_iter()
            .chain(Fuel::ALL.into_iter().map(|fuel| price_cell(record, fuel)))
            .collect::<Vec<_>>(),
        );
    }
    table
}

/// One station in detail, one fuel per row.
pub fn build_station_table(record: &StationRecord) -> Table {
    let mut table = new_table();
    table.set_header(vec!["Carburant", "Prix", "Mise à jour"]);
    for fuel in Fuel::ALL {
        let updated_at = record
            .updated_at(fuel)
            .map_or_else(String::new, |at| at.format("%d/%m/%Y %H:%M").to_string());
        table.add_row(vec![
            Cell::new(fuel.label()),
            price_cell(record, fuel),
            Cell::new(updated_at).add_attribute(Attribute::Dim),
        ]);
    }
    table
}
