use anyhow::{Context, Result};
use clap::Parser;

use expense_ledger::config::LedgerPaths;
use expense_ledger::shell::Shell;
use expense_ledger::storage::Storage;

#[derive(Parser)]
#[command(
    name = "expenses",
    version,
    about = "Personal expense tracker",
    long_about = "Interactive expense tracker. Records amount, category and date for \
                  each expense in expenses.json in the current directory and prints \
                  totals by category and by month."
)]
struct Cli {}

fn main() -> Result<()> {
    let _cli = Cli::parse();

    let paths = LedgerPaths::current_dir()?;
    let storage = Storage::new(paths);

    let ledger = storage.load_ledger().with_context(|| {
        format!(
            "Could not load {}; fix or move the file and try again",
            storage.paths().expenses_file().display()
        )
    })?;

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let mut shell = Shell::new(&storage, ledger, stdin.lock(), stdout.lock());
    shell.run()?;

    Ok(())
}
