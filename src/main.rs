use std::io;
use std::path::Path;

use shield_icons::config::GeneratorConfig;
use shield_icons::generate::generate_icons;
use shield_icons::logger;

fn main() {
    logger::init(log::LevelFilter::Warn);
    let config = GeneratorConfig::default();
    let stdout = io::stdout();
    if let Err(e) = generate_icons(Path::new("."), &config, &mut stdout.lock()) {
        logger::log_error("icon generation failed", &e);
        std::process::exit(1);
    }
}
