#![doc = include_str!("../README.md")]

mod alert;
mod api;
mod cli;
mod config;
mod detect;
mod fuel;
mod notify;
mod prelude;
mod price;
mod snapshot;
mod station;
mod tables;

use clap::{Parser, crate_version};

use crate::{
    alert::Digest,
    api::Api,
    cli::{Args, CheckArgs, Command, LookupCommand, SearchArgs, SearchBy},
    config::Config,
    detect::detect_changes,
    prelude::*,
    snapshot::Snapshot,
    tables::{build_search_table, build_station_table},
};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt().without_time().compact().init();
    info!(version = crate_version!(), "starting…");

    match Args::parse().command {
        Command::Check(args) => check(&args).await,
        Command::Lookup(args) => match args.command {
            LookupCommand::Search(args) => search(&args).await,
            LookupCommand::Station(args) => {
                match Api::try_new()?.get_station(args.id).await? {
                    Some(record) => println!("{}", build_station_table(&record)),
                    None => warn!(id = %args.id, "station not found"),
                }
                Ok(())
            }
        },
    }
}

/// One monitoring run: fetch, diff, persist, notify.
///
/// A missing or broken configuration is fatal; a fetch failure is reported
/// and ends the run normally, leaving the previous snapshot untouched.
#[instrument(skip_all)]
async fn check(args: &CheckArgs) -> Result {
    let config = Config::read_from(&args.config_path)?;
    if config.station_ids.is_empty() {
        info!("no stations are configured");
        return Ok(());
    }

    let records = match Api::try_new()?.get_stations(&config.station_ids).await {
        Ok(records) => records,
        Err(error) => {
            error!(error = %format!("{error:#}"), "failed to fetch the stations");
            return Ok(());
        }
    };
    info!(n_stations = records.len(), "fetched");

    let old = Snapshot::read_from(&args.prices_path);
    let new = Snapshot::from_records(&records);
    let changes = detect_changes(&old, &new, &records, &config);
    new.write_to(&args.prices_path)?;

    if changes.is_empty() {
        info!("no price changes detected");
        return Ok(());
    }
    info!(n_changes = changes.len(), "price changes detected");

    for notice in Digest::new(changes).notices() {
        info!(title = notice.title, "{}", notice.body);
        notify::send(&notice);
    }
    Ok(())
}

#[instrument(skip_all, fields(query = %args.query))]
async fn search(args: &SearchArgs) -> Result {
    let api = Api::try_new()?;
    let records = match args.by {
        SearchBy::Cp => api.search_by_postal_code(&args.query).await?,
        SearchBy::Ville => api.search_by_city(&args.query).await?,
    };
    if records.is_empty() {
        info!("no stations found");
    } else {
        println!("{}", build_search_table(&records));
    }
    Ok(())
}
