//! Pluvia binary: loads options, logs the water balance, opens the viewer.

use std::path::Path;

use pluvia::options::Options;
use pluvia::{calc, Viewer};

fn main() {
    env_logger::init();

    let options = match std::env::args().nth(1) {
        Some(path) => match Options::load(Path::new(&path)) {
            Ok(opts) => opts,
            Err(e) => {
                log::error!("failed to load options from {path}: {e}");
                std::process::exit(1);
            }
        },
        None => Options::default(),
    };

    let report = calc::evaluate(&options.calculator.to_input());
    log::info!(
        "water balance: {:.0} L/yr captured, {:.1} L/day against {:.0} L/day demand ({:.1}% coverage)",
        report.annual_capture_l,
        report.daily_capture_l,
        report.daily_demand_l,
        report.coverage_percent,
    );

    if let Err(e) = Viewer::builder()
        .with_title("Pluvia")
        .with_options(options)
        .build()
        .run()
    {
        log::error!("viewer exited with error: {e}");
        std::process::exit(1);
    }
}
