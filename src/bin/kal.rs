extern crate kalendar as lib;

use chrono::Month;
use flexi_logger::{FileSpec, Logger};
use num_traits::FromPrimitive;
use std::fs::File;
use std::io::{self, Write};
use std::path::PathBuf;
use structopt::StructOpt;

use lib::agenda::Agenda;

#[derive(Debug, StructOpt)]
#[structopt(name = "kal", about = "Kalendar - a yearly calendar sheet generator.")]
pub struct Args {
    #[structopt(short = "y", long = "year", help = "year to generate sheets for")]
    pub year: i32,

    #[structopt(
        name = "CONFIG",
        short = "c",
        long = "config",
        help = "path to config file",
        parse(from_os_str)
    )]
    pub configfile: Option<PathBuf>,

    #[structopt(
        short = "l",
        long = "locale",
        help = "locale for month and weekday names, e.g. de_DE"
    )]
    pub locale: Option<String>,

    #[structopt(
        short = "o",
        long = "output",
        help = "write the sheets to this file instead of stdout",
        parse(from_os_str)
    )]
    pub output: Option<PathBuf>,

    #[structopt(long = "log-file", help = "path to log file", parse(from_os_str))]
    pub log_file: Option<PathBuf>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::from_args();

    const DEFAULT_LOG_LEVEL: &'static str = if cfg!(debug_assertions) {
        "debug"
    } else {
        "info"
    };

    let mut logger = Logger::try_with_env_or_str(DEFAULT_LOG_LEVEL)?;

    if let Some(log_file) = args.log_file {
        logger = logger
            .log_to_file(FileSpec::try_from(log_file)?)
            .print_message();
    }

    logger.start()?;

    let mut config = lib::config::load_suitable_config(args.configfile.as_deref())?;

    if let Some(locale) = args.locale {
        config.locale = locale;
    }

    let names = lib::locale::names(&config.locale)?;
    log::info!("Locale is: {}", config.locale);

    let agenda = Agenda::from_config(&config, args.year)?;

    let mut out: Box<dyn Write> = match &args.output {
        Some(path) => Box::new(File::create(path)?),
        None => Box::new(io::stdout()),
    };

    for month in 1..=12 {
        log::info!(
            "Generating sheet for '{} {}'...",
            Month::from_u32(month).unwrap().name(),
            args.year
        );

        let sheet = agenda.sheet(month)?;
        lib::render::write_month(&sheet, names, &mut out)?;
    }

    if let Some(path) = &args.output {
        log::info!("Enjoy your calendar: {}", path.display());
    }

    Ok(())
}
