use clap::Parser;
use serde::Serialize;

use chopstix::{solve, Classification, HandPair, Rules, State};

#[derive(Debug, Parser)]
#[command(name = "solve", about = "Chopstix state-graph solver")]
struct Args {
    /// Fingers per hand; hand values live in 0..fingers
    #[arg(long, default_value_t = 5)]
    fingers: u8,

    /// Disable the switch move
    #[arg(long)]
    no_switching: bool,

    /// Allow a switch into the current configuration (a pass).
    /// Ignored when switching is disabled.
    #[arg(long)]
    skipping: bool,

    /// Optional state to report on, as "a,b/c,d" with the side to move
    /// first. Example: --state "1,1/0,2"
    #[arg(long)]
    state: Option<String>,

    /// Emit the summary as JSON instead of plain text
    #[arg(long)]
    json: bool,
}

#[derive(Debug, Serialize)]
struct Summary {
    rules: Rules,
    states: usize,
    wins: usize,
    losses: usize,
    draws: usize,
    contested: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    query: Option<QueryResult>,
}

#[derive(Debug, Serialize)]
struct QueryResult {
    state: State,
    classification: Classification,
    rank: f64,
}

fn parse_state(s: &str) -> Result<State, String> {
    let (player, opponent) = s
        .split_once('/')
        .ok_or_else(|| format!("invalid state '{s}', expected \"a,b/c,d\""))?;
    Ok(State::new(parse_pair(player)?, parse_pair(opponent)?))
}

fn parse_pair(s: &str) -> Result<HandPair, String> {
    let (a, b) = s
        .split_once(',')
        .ok_or_else(|| format!("invalid hand pair '{s}', expected \"a,b\""))?;
    let a: u8 = a
        .trim()
        .parse()
        .map_err(|e| format!("bad hand value '{a}': {e}"))?;
    let b: u8 = b
        .trim()
        .parse()
        .map_err(|e| format!("bad hand value '{b}': {e}"))?;
    Ok(HandPair::new(a, b))
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let args = Args::parse();

    let rules = Rules::new(args.fingers, !args.no_switching, args.skipping);
    let solved = solve(rules)?;

    let mut counts = [0usize; 4];
    for class in &solved.classes {
        let slot = match class {
            Classification::Win => 0,
            Classification::Loss => 1,
            Classification::Draw => 2,
            Classification::Contested => 3,
        };
        counts[slot] += 1;
    }

    let query = match &args.state {
        Some(raw) => {
            let state = parse_state(raw)?;
            Some(QueryResult {
                state,
                classification: solved.classification_of(&state)?,
                rank: solved.rank_of(&state)?,
            })
        }
        None => None,
    };

    let summary = Summary {
        rules,
        states: solved.state_count(),
        wins: counts[0],
        losses: counts[1],
        draws: counts[2],
        contested: counts[3],
        query,
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
        return Ok(());
    }

    println!(
        "[solve] fingers={} switching={} skipping={}",
        rules.fingers, rules.switching, rules.skipping
    );
    println!(
        "[solve] {} states: {} win, {} loss, {} draw, {} contested",
        summary.states, summary.wins, summary.losses, summary.draws, summary.contested
    );
    if let Some(q) = &summary.query {
        println!(
            "[solve] (({},{}),({},{})) -> {:?}, rank {:.6}",
            q.state.player.low,
            q.state.player.high,
            q.state.opponent.low,
            q.state.opponent.high,
            q.classification,
            q.rank
        );
    }

    Ok(())
}
