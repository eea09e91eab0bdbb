use clap::Parser;
use flexi_logger::Logger;

use glyph_dump::Args;

fn main() {
    let args = Args::parse();

    let _logger = Logger::try_with_env_or_str("warn")
        .and_then(|logger| logger.log_to_stderr().start());

    if let Err(err) = glyph_dump::run(&args) {
        eprintln!("{err:#}");
        std::process::exit(1);
    }
}
