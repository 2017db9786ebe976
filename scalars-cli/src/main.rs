#![doc = include_str!("../../README.md")]

mod cli;
mod config;
mod fmt;
mod prelude;
mod tables;

use clap::{Parser, crate_version};

use crate::{
    cli::{Args, Command},
    config::Config,
    prelude::*,
};

fn main() -> Result {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt().without_time().compact().with_writer(std::io::stderr).init();
    info!(version = crate_version!(), "starting…");

    let args = Args::parse();
    let config = Config::read_from(&args.config)?;
    let tolerance = args.tolerance.apply(config.tolerance);
    debug!(?tolerance);

    match args.command {
        Command::Convert(args) => args.run()?,
        Command::Interpolate(args) => args.run()?,
        Command::Compare(args) => args.run(tolerance)?,
        Command::Units(args) => args.run()?,
    }

    info!("done!");
    Ok(())
}
