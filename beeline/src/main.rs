use beeline::app::{run, BeelineAppArguments};
use clap::Parser;

fn main() {
    let args = BeelineAppArguments::parse();
    if let Err(e) = run(&args.app) {
        log::error!("beeline failed: {e}");
        eprintln!("{e}");
        std::process::exit(1);
    }
}
