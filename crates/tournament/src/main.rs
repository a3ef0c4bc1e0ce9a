//! Tournament CLI
//!
//! Run matches between Isolation agents and track Elo ratings.

use std::env;
use std::path::Path;
use std::time::Duration;

use anyhow::{bail, Context, Result};
use isolation_core::Agent;
use random_engine::RandomAgent;
use search_engine::{Heuristic, SearchAgent, SearchConfig, SearchMethod};
use tournament::{EloTracker, MatchConfig, MatchRunner, TournamentConfig, TournamentResults};
use tracing_subscriber::EnvFilter;

const ELO_FILE: &str = "tournament_elo.json";

/// Reference field a challenger is measured against
const GAUNTLET_OPPONENTS: [&str; 7] = [
    "random",
    "mm_null",
    "mm_open",
    "mm_improved",
    "ab_null",
    "ab_open",
    "ab_improved",
];

fn print_usage() {
    println!("Isolation Tournament Runner");
    println!();
    println!("Usage:");
    println!("  tournament match <agent1> <agent2> [--games N] [--time MS] [--seed S]");
    println!("  tournament gauntlet <challenger> [--games N] [--time MS] [--seed S] [--save FILE]");
    println!("  tournament leaderboard");
    println!();
    println!("Agents:");
    println!("  random            - Uniformly random legal moves");
    println!("  mm_<heuristic>    - Minimax, fixed depth 3");
    println!("  ab_<heuristic>    - Alpha-beta, fixed depth 5");
    println!("  id_<heuristic>    - Alpha-beta with iterative deepening");
    println!("  <file>.toml       - Search agent loaded from a config file");
    println!();
    println!(
        "Heuristics: {}",
        Heuristic::ALL.map(Heuristic::as_str).join(", ")
    );
    println!();
    println!("Examples:");
    println!("  tournament match id_custom ab_improved --games 20 --time 150");
    println!("  tournament gauntlet agents/custom.toml --games 10");
}

/// Build an agent from its name. `seed` makes the random agent reproducible.
fn create_agent(spec: &str, seed: Option<u64>) -> Result<Box<dyn Agent>> {
    if spec.ends_with(".toml") {
        let config = SearchConfig::load(spec)
            .with_context(|| format!("failed to load agent config {spec}"))?;
        let name = Path::new(spec)
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| spec.to_string());
        return Ok(Box::new(SearchAgent::new(name, config)?));
    }

    let lower = spec.to_lowercase();
    if lower == "random" {
        let agent = match seed {
            Some(seed) => RandomAgent::with_seed(seed),
            None => RandomAgent::new(),
        };
        return Ok(Box::new(agent));
    }

    let Some((kind, heuristic)) = lower.split_once('_') else {
        bail!("unknown agent `{spec}`");
    };
    let heuristic: Heuristic = heuristic
        .parse()
        .with_context(|| format!("bad agent `{spec}`"))?;
    let config = match kind {
        "mm" => SearchConfig::fixed(SearchMethod::Minimax, 3),
        "ab" => SearchConfig::fixed(SearchMethod::AlphaBeta, 5),
        "id" => SearchConfig::iterative(SearchMethod::AlphaBeta),
        _ => bail!("unknown agent kind `{kind}` in `{spec}`"),
    };
    Ok(Box::new(SearchAgent::new(spec, config.with_heuristic(heuristic))?))
}

/// Options shared by `match` and `gauntlet`.
struct Options {
    num_games: u32,
    time_ms: Option<u64>,
    seed: Option<u64>,
    save: Option<String>,
}

fn parse_options(args: &[String]) -> Result<Options> {
    let mut options = Options {
        num_games: 10,
        time_ms: Some(150),
        seed: None,
        save: None,
    };

    let mut i = 0;
    while i < args.len() {
        let value = args.get(i + 1);
        match (args[i].as_str(), value) {
            ("--games" | "-g", Some(v)) => {
                options.num_games = v.parse().with_context(|| format!("bad game count `{v}`"))?;
            }
            ("--time" | "-t", Some(v)) => {
                // 0 disables the clock
                let ms: u64 = v.parse().with_context(|| format!("bad move time `{v}`"))?;
                options.time_ms = (ms > 0).then_some(ms);
            }
            ("--seed" | "-s", Some(v)) => {
                options.seed = Some(v.parse().with_context(|| format!("bad seed `{v}`"))?);
            }
            ("--save", Some(v)) => options.save = Some(v.clone()),
            (flag, _) => bail!("unexpected argument `{flag}`"),
        }
        i += 2;
    }
    Ok(options)
}

impl Options {
    fn match_config(&self, verbose: bool) -> MatchConfig {
        MatchConfig {
            num_games: self.num_games,
            time_per_move: self.time_ms.map(Duration::from_millis),
            seed: self.seed,
            verbose,
            ..Default::default()
        }
    }

    fn describe_time(&self) -> String {
        match self.time_ms {
            Some(ms) => format!("{ms} ms/move"),
            None => "unlimited".to_string(),
        }
    }
}

fn run_match(args: &[String]) -> Result<()> {
    if args.len() < 2 {
        print_usage();
        bail!("match requires two agent specifications");
    }

    let agent1_spec = &args[0];
    let agent2_spec = &args[1];
    let options = parse_options(&args[2..])?;

    println!("=== Match: {} vs {} ===", agent1_spec, agent2_spec);
    println!("Games: {}, Time: {}", options.num_games, options.describe_time());
    println!();

    let mut agent1 = create_agent(agent1_spec, options.seed)?;
    let mut agent2 = create_agent(agent2_spec, options.seed)?;

    let runner = MatchRunner::new(options.match_config(true));
    let result = runner.run_match(agent1.as_mut(), agent2.as_mut())?;

    println!();
    println!("=== Final Result ===");
    println!(
        "{}: {} wins, {} losses ({} by forfeit)",
        agent1_spec, result.wins, result.losses, result.losses_by_forfeit
    );
    println!("Score: {:.1}%", result.score() * 100.0);

    let mut tracker = EloTracker::load_or_default(ELO_FILE);
    tracker.update_ratings(agent1_spec, agent2_spec, &result);
    tracker.print_leaderboard();
    tracker.save(ELO_FILE).context("failed to save Elo tracker")?;
    Ok(())
}

fn run_gauntlet(args: &[String]) -> Result<()> {
    let Some(challenger_spec) = args.first() else {
        print_usage();
        bail!("gauntlet requires a challenger agent");
    };
    let options = parse_options(&args[1..])?;

    println!("=== Gauntlet: {} vs all ===", challenger_spec);
    println!("Opponents: {:?}", GAUNTLET_OPPONENTS);
    println!(
        "Games per match: {}, Time: {}",
        options.num_games,
        options.describe_time()
    );
    println!();

    let mut tracker = EloTracker::load_or_default(ELO_FILE);
    let mut results = TournamentResults::new(
        &format!("Gauntlet: {}", challenger_spec),
        std::iter::once(challenger_spec.to_string())
            .chain(GAUNTLET_OPPONENTS.iter().map(|s| s.to_string()))
            .collect(),
        TournamentConfig {
            games_per_match: options.num_games,
            time_per_move_ms: options.time_ms,
            ..Default::default()
        },
    );

    let runner = MatchRunner::new(options.match_config(false));
    for opponent in GAUNTLET_OPPONENTS {
        println!("\n--- {} vs {} ---", challenger_spec, opponent);

        let mut challenger = create_agent(challenger_spec, options.seed)?;
        let mut opp_agent = create_agent(opponent, options.seed)?;

        let result = runner.run_match(challenger.as_mut(), opp_agent.as_mut())?;

        println!(
            "Result: {}-{} (Score: {:.1}%)",
            result.wins,
            result.losses,
            result.score() * 100.0
        );

        tracker.update_ratings(challenger_spec, opponent, &result);
        results.add_match(challenger_spec, opponent, result);
    }

    println!();
    tracker.print_leaderboard();
    results.print_report();

    tracker.save(ELO_FILE).context("failed to save Elo tracker")?;
    if let Some(path) = &options.save {
        results
            .save(Path::new(path))
            .context("failed to save tournament results")?;
    }
    Ok(())
}

fn show_leaderboard() {
    match EloTracker::load(ELO_FILE) {
        Ok(tracker) => tracker.print_leaderboard(),
        Err(_) => {
            println!("No tournament data found. Run some matches first!");
        }
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        print_usage();
        return Ok(());
    }

    match args[1].as_str() {
        "match" => run_match(&args[2..]),
        "gauntlet" => run_gauntlet(&args[2..]),
        "leaderboard" | "elo" => {
            show_leaderboard();
            Ok(())
        }
        "help" | "--help" | "-h" => {
            print_usage();
            Ok(())
        }
        other => {
            print_usage();
            bail!("unknown command `{other}`")
        }
    }
}
