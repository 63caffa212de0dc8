use std::io;
use std::path::Path;

use shield_icons::config::GeneratorConfig;
use shield_icons::logger;
use shield_icons::status::{check_icons, write_report};

fn main() {
    logger::init(log::LevelFilter::Warn);
    let config = GeneratorConfig::default();
    let report = match check_icons(Path::new("."), &config) {
        Ok(r) => r,
        Err(e) => {
            logger::log_error("icon check failed", &e);
            std::process::exit(1);
        }
    };
    if let Err(e) = write_report(&report, &mut io::stdout().lock()) {
        logger::log_error("writing report failed", &e);
        std::process::exit(1);
    }
    if !report.is_complete() {
        println!("Run shield-icons from this directory to regenerate the missing files.");
        std::process::exit(1);
    }
}
