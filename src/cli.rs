use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(
    name = "license-listr",
    about = "Run an external license checker and export its table as JSON",
    version
)]
pub struct Cli {
    /// License checker command to run (program followed by its arguments)
    #[arg(
        value_name = "COMMAND",
        num_args = 1..,
        trailing_var_arg = true,
        default_values = ["dart", "run", "dart_license_checker.dart"]
    )]
    pub command: Vec<String>,

    /// File receiving the checker's raw output verbatim
    #[arg(long, value_name = "FILE", default_value = "raw.txt")]
    pub raw: PathBuf,

    /// JSON mapping output path
    #[arg(short, long, value_name = "FILE", default_value = "license_list.json")]
    pub output: PathBuf,

    /// List every table line that could not be parsed
    #[arg(short, long)]
    pub verbose: bool,

    /// Suppress the raw output echo and the summary
    #[arg(short, long)]
    pub quiet: bool,
}
