use clap::Parser;
use env_logger::{Builder, Env};
use std::path::PathBuf;

/// Prefix commit messages with the issue reference from the current branch.
#[derive(Debug, Parser)]
#[command(name = "commithelper", version, about)]
struct Cli {
    /// Commit message file (as passed to a commit-msg hook) or the message text
    #[arg(allow_hyphen_values = true)]
    input: Option<String>,

    /// Path to the JSON config file [default: ./.commithelperrc.json]
    #[arg(long)]
    config: Option<PathBuf>,

    /// Print the configured branch rules as JSON and exit
    #[arg(short, long)]
    show: bool,
}

fn main() -> miette::Result<()> {
    Builder::from_env(Env::default().default_filter_or("warn"))
        .format_timestamp(None)
        .init();

    // Usage errors exit with 1 like every other failure; help and version
    // keep clap's own output and status.
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if !e.use_stderr() => e.exit(),
        Err(e) => {
            let _ = e.print();
            std::process::exit(1);
        }
    };

    if cli.show {
        commithelper::show_rules(cli.config.as_deref())?;
    } else {
        commithelper::run(cli.input.as_deref(), cli.config.as_deref())?;
    }
    Ok(())
}
