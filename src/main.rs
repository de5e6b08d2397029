use std::io;
use std::path::PathBuf;

use clap::{ArgAction, Parser};
use tracing_subscriber::EnvFilter;

use bugfind::{App, StdioPrompter};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Bug pattern file (asked for interactively when omitted)
    #[arg(value_name = "BUG")]
    bug: Option<PathBuf>,

    /// Landscape file to search (asked for interactively when omitted)
    #[arg(value_name = "LANDSCAPE")]
    landscape: Option<PathBuf>,

    /// List the row and column of every bug found
    #[arg(short = 'l', long)]
    locations: bool,

    /// More log output on stderr (repeat for more)
    #[arg(short = 'v', long, action = ArgAction::Count)]
    verbose: u8,
}

fn init_logging(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    let mut app = App::new(args.bug, args.landscape);
    app.show_locations = args.locations;

    let mut prompter = StdioPrompter::new();
    let mut stdout = io::stdout();
    app.run(&mut prompter, &mut stdout)?;
    Ok(())
}
