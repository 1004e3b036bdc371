//! handgen: print random bridge deals in PBN notation.

use anyhow::{Context, Result};
use clap::Parser;
use handgen::{GeneratorConfig, Position, RandomHandGenerator, DEFAULT_MAX_ATTEMPTS};
use handgen_pbn::{format_deal, format_deal_tag};
use log::{debug, info};

#[derive(Parser, Debug)]
#[command(name = "handgen")]
#[command(version, about = "Random bridge deal generator", long_about = None)]
struct Args {
    /// Dealer (N, E, S or W); rotates with the board number when omitted
    #[arg(short = 'd', long = "dealer", value_parser = parse_dealer)]
    dealer: Option<Position>,

    /// Number of boards to produce
    #[arg(short = 'p', long = "produce", default_value_t = 1)]
    produce: usize,

    /// Re-deal boards where no hand has more than 11 HCP
    #[arg(short = 'r', long = "reject-weak")]
    reject_weak: bool,

    /// Random seed (defaults to the system clock)
    #[arg(short = 's', long = "seed")]
    seed: Option<u64>,

    /// Shuffles allowed per board when rejecting weak deals (0 = unlimited)
    #[arg(long = "max-attempts", default_value_t = DEFAULT_MAX_ATTEMPTS)]
    max_attempts: u32,

    /// Print each board as a PBN [Deal "..."] tag
    #[arg(long)]
    pbn: bool,

    /// Enable verbose logging (repeat for more)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn parse_dealer(s: &str) -> Result<Position, String> {
    s.parse().map_err(|e: handgen::DealError| e.to_string())
}

fn main() -> Result<()> {
    let args = Args::parse();

    let log_level = match args.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level))
        .format_timestamp_millis()
        .init();

    let config = GeneratorConfig {
        reject_weak: args.reject_weak,
        max_attempts: (args.max_attempts > 0).then_some(args.max_attempts),
    };
    debug!("Config: {:?}, seed: {:?}", config, args.seed);

    let mut generator = match args.seed {
        Some(seed) => RandomHandGenerator::with_seed(seed, config),
        None => RandomHandGenerator::new(config),
    };

    for board in 1..=args.produce {
        let dealer = args.dealer.unwrap_or_else(|| Position::for_board(board));
        let deal = generator
            .next_deal()
            .with_context(|| format!("Failed to generate board {}", board))?;

        if args.pbn {
            println!("{}", format_deal_tag(dealer, &deal));
        } else {
            println!("{}", format_deal(dealer, &deal));
        }
    }

    info!("Generated {} deals", generator.generated_count());
    info!("Produced {} deals", args.produce);

    Ok(())
}
