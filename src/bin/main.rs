use clap::Parser;
use lmm_hydro::{Configuration, Engine};
use yaml_rust::YamlLoader;

use std::{error::Error, fs, path::PathBuf};

#[derive(Parser)]
struct Cli {
    /// The path to the scenario file to read
    #[clap(parse(from_os_str))]
    scenario: PathBuf,

    /// Log verbosity ("error", "warn", "info", "debug", "trace")
    #[clap(long, default_value = "info")]
    log_level: log::LevelFilter,
}

fn main() -> Result<(), Box<dyn Error>> {
    let args = Cli::parse();
    simple_logger::SimpleLogger::new()
        .with_level(args.log_level)
        .init()?;

    let docs = YamlLoader::load_from_str(&fs::read_to_string(args.scenario)?)?;
    let config = Configuration::from_yaml(&docs[0])?;

    let mut engine = Engine::new(&config);
    engine.run()?;

    println!("Done!");
    Ok(())
}
