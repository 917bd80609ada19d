use carbonroute::app::{CarbonApp, CarbonAppError};
use clap::Parser;

fn main() {
    env_logger::init();
    log::debug!("cwd: {:?}", std::env::current_dir());
    let args = CarbonApp::parse();
    match run_carbonroute(args) {
        Ok(_) => {}
        Err(e) => {
            log::error!("{e}");
            std::process::exit(1);
        }
    }
}

fn run_carbonroute(args: CarbonApp) -> Result<(), CarbonAppError> {
    log::info!("starting app at {}", chrono::Local::now().to_rfc3339());
    args.run()
}
