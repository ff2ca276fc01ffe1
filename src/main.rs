mod cli;
mod runner;

use anyhow::Result;

fn main() -> Result<()> {
    let args = cli::Cli::parse();

    let results = runner::run_all(&args.folder, &args.host, &args.port)?;

    // The JSON array is the program's only stdout output.
    println!("{}", serde_json::to_string(&results)?);
    Ok(())
}
