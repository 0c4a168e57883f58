use clap::{Parser, Subcommand};

/// Top-level CLI structure.
#[derive(Parser)]
#[command(
    name = "bullet-measure",
    about = "Partition, rank-colour and order segmented bullet-chart measures"
)]
pub struct Cli {
    #[command(subcommand)]
    pub cmd: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Classify measures from a CSV or JSON file
    Classify(ClassifyArgs),
    /// Show the built-in colour scales
    Palettes,
    /// Classify a randomly generated measure set
    Demo(DemoArgs),
    /// Print example invocations
    Examples,
}

/// `bullet-measure classify …`
#[derive(Parser, Debug)]
pub struct ClassifyArgs {
    /// Input path (use `-` for stdin)
    #[arg(value_name = "FILE", default_value = "-")]
    pub file: String,

    /// Read records as a JSON array instead of CSV
    #[arg(long)]
    pub json: bool,

    /// Value accessor: key path (`y`, `metrics.q1`, `y[2].v`) or column index
    #[arg(long)]
    pub y: Option<String>,

    /// Baseline accessor, same syntax as --y
    #[arg(long)]
    pub y0: Option<String>,

    /// Swap the positive / negative colour scales
    #[arg(long)]
    pub invert: bool,

    /// Comma-separated colours overriding the positive scale
    #[arg(long)]
    pub positive: Option<String>,

    /// Comma-separated colours overriding the negative scale
    #[arg(long)]
    pub negative: Option<String>,

    /// Prefix for generated render keys
    #[arg(long, default_value = "measure")]
    pub key_prefix: String,

    /// Draw proportional bars under the table
    #[arg(long)]
    pub preview: bool,
}

/// `bullet-measure demo …`
#[derive(Parser, Debug)]
pub struct DemoArgs {
    /// Number of random measures
    #[arg(long, default_value_t = 8)]
    pub points: usize,
    /// Mean of the generated values
    #[arg(long, default_value_t = 0.0)]
    pub mu: f64,
    /// Standard deviation of the generated values
    #[arg(long, default_value_t = 25.0)]
    pub sigma: f64,
    /// Fixed RNG seed (time-based if omitted)
    #[arg(long)]
    pub seed: Option<u64>,
    /// Swap the positive / negative colour scales
    #[arg(long)]
    pub invert: bool,
}
