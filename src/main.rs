use clap::Parser;
use ipv4_calc::cli::Cli;
use ipv4_calc::config::Settings;
use ipv4_calc::logging::init_logging;
use ipv4_calc::run;
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    // Do as little as possible in main.rs as it can't contain any tests
    dotenv::dotenv().ok();
    let settings = Settings::from_env()?;
    init_logging(&settings)?;
    log::info!("#Start main()");

    let cli = Cli::parse();
    let rendered = run(cli, &settings).map_err(|e| {
        log::error!("{e}");
        e
    })?;
    print!("{rendered}");

    Ok(())
}
