//! Entry point for the tile synthesis service

use clap::Parser;
use tilewave::io::cli::{Cli, Mode};
use tilewave::io::loader::load_tile_set;
use tilewave::io::logging::init_logging;
use tilewave::service::{batch, http, report};

fn main() -> tilewave::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.quiet);
    let config = cli.service_config()?;

    match cli.mode() {
        Mode::RunOnce => batch::run_once(&config, &cli.synthesis_config(), cli.quiet).map(|_| ()),
        Mode::PrintAdjacency => {
            let tiles = load_tile_set(&config.tiles_dir, &config.fingerprinter)?;
            print_report(&report::adjacency_table(&tiles, &config.border));
            Ok(())
        }
        Mode::Serve => http::serve_blocking(config),
    }
}

// The report is the command's output, not a log line
#[allow(clippy::print_stdout)]
fn print_report(report: &str) {
    print!("{report}");
}
