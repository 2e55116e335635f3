use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::error::ErrorKind;
use clap::Parser;
use dirls::core::telemetry::logging::init_logging;
use dirls::ListOptions;

#[derive(Debug, Parser)]
#[command(
    name = "dirls",
    version,
    about = "List directory contents",
    override_usage = "dirls [-al] [directory_path]"
)]
struct Cli {
    /// Include the `.` and `..` entries
    #[arg(short = 'a', long = "all")]
    all: bool,

    /// Long format: permissions, links, owner, group, size, mtime
    #[arg(short = 'l', long = "long")]
    long: bool,

    /// Directory to list
    #[arg(value_name = "DIRECTORY", default_value = ".")]
    path: PathBuf,
}

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            let _ = err.print();
            return match err.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => ExitCode::SUCCESS,
                _ => ExitCode::from(1),
            };
        }
    };

    init_logging();
    let options = ListOptions::new(cli.all, cli.long);

    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());
    match dirls::ui::run(&cli.path, &options, &mut out) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            let _ = out.flush();
            eprintln!("{}", err.diagnostic());
            ExitCode::from(err.exit_code())
        }
    }
}
