use colored::Colorize;
use std::error::Error;
use vlsm_planner::cli::Args;
use vlsm_planner::config::{OutputFormat, Settings};
use vlsm_planner::output;
use vlsm_planner::plan;

fn main() -> Result<(), Box<dyn Error>> {
    // Do as little as possible in main.rs as it can't contain any tests
    log4rs::init_file("log4rs.yml", Default::default()).expect("Error initializing log4rs");
    dotenv::dotenv().ok();
    //
    log::info!("#Start main()");

    let args = Args::parse(std::env::args())?;
    let settings = Settings::from_env()?;
    let format = args.format.unwrap_or(settings.format);

    let (network, subnets) = match plan(&args.network, &args.hosts) {
        Ok(result) => result,
        Err(e) => {
            log::error!("Planning failed: {e}");
            eprintln!("{} {e}", "error:".on_red());
            std::process::exit(1);
        }
    };

    match format {
        OutputFormat::Table => output::print_allocations(network, &subnets),
        OutputFormat::Report => print!(
            "{}",
            output::render_report(&settings.report_title, network, &subnets)
        ),
        OutputFormat::Json => println!("{}", output::allocations_to_json(&subnets)?),
    }

    Ok(())
}
