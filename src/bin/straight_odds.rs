use std::process::ExitCode;
use straight_odds::simulation::Simulation;

fn main() -> ExitCode {
    env_logger::init();
    log::debug!("straight-odds {}", straight_odds::VERSION);

    match Simulation::default().run() {
        Ok(report) => {
            println!("{report}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            log::error!("simulation failed: {e}");
            ExitCode::FAILURE
        }
    }
}
