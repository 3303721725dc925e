use clap::Parser;
use std::error::Error;
use std::process::ExitCode;
use subnetcalc::cli::Cli;
use subnetcalc::logging::init_logging;
use subnetcalc::output::{format_error, format_report};
use subnetcalc::{calculate, web};

#[tokio::main]
async fn main() -> ExitCode {
    // Do as little as possible in main.rs as it can't contain any tests
    dotenv::dotenv().ok();
    if let Err(e) = init_logging() {
        eprintln!("{}", format_error(e));
    }
    log::info!("#Start main()");

    match run(Cli::parse()).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{e}");
            println!("{}", format_error(e));
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn Error>> {
    if let Some(command) = &cli.command {
        return web::serve(&command.server_config()).await;
    }
    let input = cli.input()?;
    log::debug!("calculate {input:?}");
    let report = calculate(&input)?;
    print!("{}", format_report(&report));
    Ok(())
}
