use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use tracing::Level;

use reflex_pong::ai::Difficulty;
use reflex_pong::config::{self, Config};
use reflex_pong::game::Side;
use reflex_pong::{debug, game_modes};

/// Command-line overrides; anything left `None` comes from the config file
#[derive(Debug, Default)]
struct Args {
    left: Option<Difficulty>,
    right: Option<Difficulty>,
    ticks: Option<u64>,
    seed: Option<u64>,
    config: Option<PathBuf>,
    realtime: bool,
    debug: bool,
}

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().collect();
    let parsed = parse_args(&args)?;

    debug::init(parsed.debug, Level::WARN).context("failed to set up logging")?;

    let mut config = match &parsed.config {
        Some(path) => config::load_config_from(path)
            .with_context(|| format!("failed to load config from {}", path.display()))?,
        None => config::load_config().context("failed to load config")?,
    };
    apply_overrides(&mut config, &parsed);

    let left = config.difficulty(Side::Left)?;
    let right = config.difficulty(Side::Right)?;
    println!("{} (left) vs {} (right)", left.display_name(), right.display_name());
    println!("  left:  {}", left.description());
    println!("  right: {}", right.description());

    let result = game_modes::run_match(&config).context("match failed")?;

    println!(
        "Final score: {} - {}  (hits {} - {}, {} ticks)",
        result.left_score, result.right_score, result.left_hits, result.right_hits, result.ticks
    );
    match result.winner {
        Some(Side::Left) => println!("Winner: left ({})", left.display_name()),
        Some(Side::Right) => println!("Winner: right ({})", right.display_name()),
        None => println!("No winner: tick limit reached"),
    }

    Ok(())
}

fn apply_overrides(config: &mut Config, args: &Args) {
    if let Some(left) = args.left {
        config.ai.left_difficulty = left.as_str().to_string();
    }
    if let Some(right) = args.right {
        config.ai.right_difficulty = right.as_str().to_string();
    }
    if let Some(ticks) = args.ticks {
        config.simulation.max_ticks = ticks;
    }
    if args.seed.is_some() {
        config.ai.seed = args.seed;
    }
    if args.realtime {
        config.simulation.realtime = true;
    }
}

fn parse_args(args: &[String]) -> Result<Args> {
    let program = args.first().map(String::as_str).unwrap_or("reflex-pong");
    let mut parsed = Args::default();
    let mut rest = args.iter().skip(1);

    while let Some(arg) = rest.next() {
        match arg.as_str() {
            "--left" | "-l" => parsed.left = Some(value(&mut rest, arg)?.parse()?),
            "--right" | "-r" => parsed.right = Some(value(&mut rest, arg)?.parse()?),
            "--ticks" | "-t" => {
                let raw = value(&mut rest, arg)?;
                parsed.ticks = Some(
                    raw.parse()
                        .with_context(|| format!("invalid tick count: {}", raw))?,
                );
            }
            "--seed" | "-s" => {
                let raw = value(&mut rest, arg)?;
                parsed.seed = Some(raw.parse().with_context(|| format!("invalid seed: {}", raw))?);
            }
            "--config" | "-c" => parsed.config = Some(PathBuf::from(value(&mut rest, arg)?)),
            "--realtime" => parsed.realtime = true,
            "--debug" | "-d" => parsed.debug = true,
            "--help" | "-h" => {
                print_usage(program);
                std::process::exit(0);
            }
            _ => {
                print_usage(program);
                bail!("unknown argument: {}", arg);
            }
        }
    }

    Ok(parsed)
}

fn value<'a>(rest: &mut impl Iterator<Item = &'a String>, flag: &str) -> Result<&'a str> {
    match rest.next() {
        Some(value) => Ok(value.as_str()),
        None => bail!("{} requires a value", flag),
    }
}

fn print_usage(program: &str) {
    println!("Reflex Pong - headless AI vs AI Pong");
    println!();
    println!("Usage:");
    println!("  {} [options]", program);
    println!();
    println!("Options:");
    println!("  -l, --left <easy|medium|hard>    Left paddle difficulty");
    println!("  -r, --right <easy|medium|hard>   Right paddle difficulty");
    println!("  -t, --ticks <n>                  Stop after n ticks");
    println!("  -s, --seed <n>                   Seed for a reproducible match");
    println!("  -c, --config <path>              Config file to use");
    println!("      --realtime                   Pace the match at 60 FPS");
    println!("  -d, --debug                      Log to {}", debug::LOG_FILE_PATH);
    println!();
    println!("Examples:");
    println!("  {} --left easy --right hard --seed 7", program);
}
