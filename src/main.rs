mod opt;

use std::fs::File;
use std::io::{BufReader, BufWriter, Write};

use anyhow::{Context, Result};
use clap::Parser;
use log::{debug, info};

use feynmult::enumerate::accepted_diagrams;
use feynmult::version::VERSION_STRING;
use feynmult::writer::{write, write_header};
use feynmult::Config;

use crate::opt::Args;

fn read_config(args: &Args) -> Result<Config> {
    let mut config = if let Some(filename) = &args.config {
        info!("Reading configuration from {filename:?}");
        let file = File::open(filename)
            .with_context(|| format!("Failed to read {filename:?}"))?;
        Config::from_reader(BufReader::new(file)).with_context(|| {
            format!("Reading configuration from {filename:?}")
        })?
    } else {
        info!("Using default configuration");
        Config::default()
    };
    args.apply_to(&mut config);
    config.validate()?;
    debug!("Configuration: {config:?}");
    Ok(config)
}

fn write_diagrams(
    args: &Args,
    config: &Config,
    mut out: impl Write,
) -> Result<()> {
    if args.print_config {
        serde_yaml::to_writer(&mut out, config)
            .with_context(|| "Failed to write configuration")?;
        return Ok(());
    }

    write_header(&mut out, args.format)
        .with_context(|| "Failed to write output header")?;
    for (n, dia) in accepted_diagrams(config).iter().enumerate() {
        write(&mut out, n + 1, dia, args.format)?;
    }
    out.flush()?;
    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();
    env_logger::Builder::new()
        .parse_filters(&args.loglevel)
        .init();
    info!("{}", *VERSION_STRING);

    let config = read_config(&args)?;

    if let Some(filename) = &args.outfile {
        let out = File::create(filename)
            .with_context(|| format!("Failed to create {filename:?}"))?;
        write_diagrams(&args, &config, BufWriter::new(out))
    } else {
        let out = std::io::stdout().lock();
        write_diagrams(&args, &config, BufWriter::new(out))
    }
}
