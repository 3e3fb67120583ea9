use std::fs::File;
use std::io::{self, BufReader};
use std::path::{Path, PathBuf};

use clap::Parser;
use snol::{Script, Session, Terminal};

/// Interpreter for SNOL, a tiny language of typed integer and float
/// variables.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Read commands, and the values requested by BEG, from this file instead
    /// of the interactive prompt.
    script: Option<PathBuf>,

    /// Print the tokens and the parsed command of every line to stderr.
    #[arg(short, long)]
    debug: bool,
}

fn main() -> Result<(), String> {
    let args = Args::parse();
    let result = match args.script {
        Some(path) => run_script(&path, args.debug),
        None => run_repl(args.debug),
    };
    result.map_err(|e| e.to_string())
}

fn run_script(path: &Path, debug: bool) -> snol::Result<()> {
    let file = File::open(path)?;
    let console = Script::new(BufReader::new(file), io::stdout().lock());
    Session::new(console).with_debug(debug).run()
}

fn run_repl(debug: bool) -> snol::Result<()> {
    Session::new(Terminal::new()?).with_debug(debug).run()
}
