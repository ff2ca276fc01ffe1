use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug, Clone)]
#[command(name = "uptester", about = "Run a folder of uptest scripts against a running proc", version)]
pub struct Cli {
    /// Folder containing the uptest scripts to run.
    #[arg(value_name = "FOLDER")]
    pub folder: PathBuf,

    /// Host the uptests should connect to.
    #[arg(value_name = "HOST")]
    pub host: String,

    /// Port the uptests should connect to. Passed through verbatim.
    #[arg(value_name = "PORT")]
    pub port: String,
}

impl Cli {
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }
}
