use clap::{Parser, Subcommand};

mod commands;

/// Velas address converter.
#[derive(Parser, Debug)]
#[command(name = "velas-address")]
#[command(about = "Convert between ETH-style (0x...) and VLX-style (V...) Velas addresses")]
#[command(version)]
struct Cli {
    /// Print results as JSON.
    #[arg(long, global = true)]
    json: bool,

    /// Enable debug logging (overridden by RUST_LOG).
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Convert an ETH-style address to VLX-style.
    ToVlx {
        /// Address to convert (0x + 40 hex digits).
        address: String,
    },

    /// Convert a VLX-style address to ETH-style.
    ToEth {
        /// Address to convert (V + 33 Base58 characters).
        address: String,
    },

    /// Detect the address form and convert to the other one.
    Convert {
        address: String,
    },

    /// Describe an address in human-readable form.
    Describe {
        address: String,
    },

    /// Check the converter against the built-in known address pairs.
    Check,
}

struct AppContext {
    json: bool,
}

impl AppContext {
    fn from_cli(cli: &Cli) -> Self {
        Self { json: cli.json }
    }
}

fn init_logging(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .format_timestamp(None)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    let ctx = AppContext::from_cli(&cli);

    let result = match cli.command {
        Commands::ToVlx { address } => commands::to_vlx(&ctx, &address),
        Commands::ToEth { address } => commands::to_eth(&ctx, &address),
        Commands::Convert { address } => commands::convert(&ctx, &address),
        Commands::Describe { address } => commands::describe(&ctx, &address),
        Commands::Check => commands::check(&ctx),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
