//! Headless Combat Runner
//!
//! Resolves a turn's worth of attack orders and nuclear strikes from a JSON
//! scenario and prints the results as JSON.

use std::path::PathBuf;

use clap::Parser;
use empire_conflict::balance::{find_bosses, ContainmentContext, SectorGraph};
use empire_conflict::combat::{AttackOrder, CombatEngine, CombatResult};
use empire_conflict::core::{EmpireId, EngineConfig, EngineError, SectorId, Turn};
use empire_conflict::empire::{AttackLog, AttackRecord, EmpireSnapshot};
use empire_conflict::nuclear::{NuclearStrikeOutcome, NuclearStrikeRequest};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

/// Headless Combat Runner - batch resolution of attack orders
#[derive(Parser, Debug)]
#[command(name = "combat_runner")]
#[command(about = "Resolve a JSON scenario of attack orders and nuclear strikes")]
struct Args {
    /// Scenario file (JSON)
    input: PathBuf,

    /// Engine tuning overrides (TOML)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Random seed for nuclear detection rolls
    #[arg(long)]
    seed: Option<u64>,

    /// Pretty-print the JSON output
    #[arg(long)]
    pretty: bool,

    /// Enable debug logging of every phase
    #[arg(long, short = 'v')]
    verbose: bool,
}

/// One turn of input, as exported by the persistence layer
#[derive(Debug, Deserialize)]
struct Scenario {
    #[serde(default)]
    turn: Turn,
    empires: Vec<EmpireSnapshot>,
    #[serde(default)]
    sector_links: Vec<(SectorId, SectorId)>,
    #[serde(default)]
    attack_log: AttackLog,
    #[serde(default)]
    orders: Vec<AttackOrder>,
    #[serde(default)]
    nuclear_strikes: Vec<NuclearStrikeRequest>,
}

#[derive(Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
enum Resolved<T> {
    Ok { result: T },
    Rejected { error: String },
}

impl<T> From<Result<T, EngineError>> for Resolved<T> {
    fn from(result: Result<T, EngineError>) -> Self {
        match result {
            Ok(result) => Resolved::Ok { result },
            Err(e) => Resolved::Rejected { error: e.to_string() },
        }
    }
}

#[derive(Serialize)]
struct Report {
    turn: Turn,
    seed: u64,
    bosses: Vec<EmpireId>,
    attacks: Vec<Resolved<CombatResult>>,
    attack_records: Vec<AttackRecord>,
    nuclear_strikes: Vec<Resolved<NuclearStrikeOutcome>>,
}

fn main() {
    let args = Args::parse();

    let level = if args.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()),
        )
        .init();

    if let Err(e) = run(&args) {
        tracing::error!("{}", e);
        std::process::exit(1);
    }
}

fn run(args: &Args) -> empire_conflict::Result<()> {
    let config = match &args.config {
        Some(path) => EngineConfig::load(path)?,
        None => EngineConfig::default(),
    };
    let engine = CombatEngine::new(config);

    let raw = std::fs::read_to_string(&args.input)?;
    let scenario: Scenario = serde_json::from_str(&raw)?;
    let graph = SectorGraph::from_links(&scenario.sector_links);

    tracing::info!(
        "Turn {}: {} empires, {} orders, {} nuclear strikes",
        scenario.turn,
        scenario.empires.len(),
        scenario.orders.len(),
        scenario.nuclear_strikes.len()
    );

    let bosses = find_bosses(&scenario.empires, &scenario.attack_log, engine.config());

    // Orders are independent given the turn's snapshot
    let attacks: Vec<Result<CombatResult, EngineError>> = scenario
        .orders
        .par_iter()
        .map(|order| {
            let containment = containment_for_order(&engine, &scenario, &graph, order);
            engine.resolve_attack(order, &containment)
        })
        .collect();

    let attack_records: Vec<AttackRecord> = attacks
        .iter()
        .filter_map(|r| r.as_ref().ok())
        .map(|result| AttackRecord::from_result(scenario.turn, result))
        .collect();

    let seed = args.seed.unwrap_or_else(rand::random);
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let nuclear_strikes: Vec<Resolved<NuclearStrikeOutcome>> = scenario
        .nuclear_strikes
        .iter()
        .map(|request| {
            Resolved::from(engine.resolve_nuclear_strike(request, &scenario.empires, &mut rng))
        })
        .collect();

    let report = Report {
        turn: scenario.turn,
        seed,
        bosses,
        attacks: attacks.into_iter().map(Resolved::from).collect(),
        attack_records,
        nuclear_strikes,
    };

    let output = if args.pretty {
        serde_json::to_string_pretty(&report)?
    } else {
        serde_json::to_string(&report)?
    };
    println!("{}", output);
    Ok(())
}

/// Containment needs both snapshots; unknown empires simply get none
fn containment_for_order(
    engine: &CombatEngine,
    scenario: &Scenario,
    graph: &SectorGraph,
    order: &AttackOrder,
) -> ContainmentContext {
    let find = |id| scenario.empires.iter().find(|e| e.id == id);
    match (find(order.attacker), find(order.defender)) {
        (Some(attacker), Some(defender)) => engine.containment_for(
            attacker,
            defender,
            &scenario.empires,
            &scenario.attack_log,
            graph,
        ),
        _ => ContainmentContext::none(engine.config()),
    }
}
