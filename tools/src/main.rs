//! campaign-runner: headless driver for the campaign tracker core.
//!
//! Usage:
//!   campaign-runner --seed 12345 --db campaign.db
//!   campaign-runner --db campaign.db --policy continuous --ipc-mode

use anyhow::Result;
use campaign_core::{
    calendar::PhasePolicy, engine::CampaignEngine, event::CampaignEvent, intent::Intent,
    store::SqliteStore, view::CampaignView,
};
use std::env;
use std::io::{self, BufRead, Write};

#[derive(serde::Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
enum IpcRequest {
    GetView,
    Intent { intent: Intent },
    Quit,
}

#[derive(serde::Serialize)]
struct IpcReply {
    events: Vec<CampaignEvent>,
    view: CampaignView,
}

fn main() -> Result<()> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let seed = parse_arg(&args, "--seed", 42u64);
    let ipc_mode = args.iter().any(|a| a == "--ipc-mode");
    let db = args
        .windows(2)
        .find(|w| w[0] == "--db")
        .map(|w| w[1].as_str())
        .unwrap_or(":memory:");
    let policy = match args
        .windows(2)
        .find(|w| w[0] == "--policy")
        .map(|w| w[1].as_str())
    {
        Some("continuous") => PhasePolicy::ContinuousModulo,
        Some("discrete") | None => PhasePolicy::DiscreteAnchor,
        Some(other) => {
            log::warn!("unknown policy '{other}', using discrete");
            PhasePolicy::DiscreteAnchor
        }
    };

    if !ipc_mode {
        println!("Barovia Campaign Tracker — campaign-runner");
        println!("  seed:    {seed}");
        println!("  db:      {db}");
        println!("  policy:  {}", policy_name(policy));
        println!();
    }

    let store = SqliteStore::open_or_memory(db)?;
    let mut engine = CampaignEngine::new(policy, seed, Box::new(store));

    if ipc_mode {
        run_ipc_loop(&mut engine)?;
    } else {
        print_summary(&engine);
    }

    Ok(())
}

fn run_ipc_loop(engine: &mut CampaignEngine) -> Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut handle = stdin.lock();
    let mut buffer = String::new();

    loop {
        buffer.clear();
        let bytes_read = handle.read_line(&mut buffer)?;
        if bytes_read == 0 {
            break; // EOF
        }

        let request: IpcRequest = match serde_json::from_str(&buffer) {
            Ok(r) => r,
            Err(e) => {
                let err_json = serde_json::json!({ "error": e.to_string() });
                writeln!(stdout, "{}", err_json)?;
                stdout.flush()?;
                continue;
            }
        };

        match request {
            IpcRequest::Quit => break,
            IpcRequest::GetView => {
                let reply = IpcReply {
                    events: Vec::new(),
                    view: engine.view(),
                };
                writeln!(stdout, "{}", serde_json::to_string(&reply)?)?;
            }
            IpcRequest::Intent { intent } => {
                let events = engine.dispatch(intent);
                let reply = IpcReply {
                    events,
                    view: engine.view(),
                };
                writeln!(stdout, "{}", serde_json::to_string(&reply)?)?;
            }
        }
        stdout.flush()?;
    }
    Ok(())
}

fn print_summary(engine: &CampaignEngine) {
    let view = engine.view();
    let cycle_len = engine.calendar.cycle_length();

    println!("=== CAMPAIGN STATE ===");
    println!("  day:    {} of {cycle_len}", view.day);
    println!("  moon:   {} | {}", view.phase.name, view.phase.flavor_text);
    println!("  map:    {}", view.map_transform);

    println!();
    println!("=== CALENDAR (current day and days with events) ===");
    for cell in &view.cycle {
        if !cell.is_current && cell.events.is_empty() {
            continue;
        }
        let marker = if cell.is_current { ">" } else { " " };
        if cell.events.is_empty() {
            println!("  {marker} day {:>2}  {}", cell.day, cell.moon_name);
        } else {
            println!(
                "  {marker} day {:>2}  {}  [{}]",
                cell.day,
                cell.moon_name,
                cell.events.join(", ")
            );
        }
    }

    println!();
    println!("=== QUEST BOARD ===");
    if view.quests.is_empty() {
        println!("  (no active quests)");
    }
    for (i, quest) in view.quests.iter().enumerate() {
        match quest.day {
            Some(day) => println!("  [{i}] {} (day {day})", quest.text),
            None => println!("  [{i}] {}", quest.text),
        }
    }
    if !view.done_quests.is_empty() {
        println!("  done:");
        for quest in &view.done_quests {
            println!("    - {}", quest.text);
        }
    }
}

fn policy_name(policy: PhasePolicy) -> &'static str {
    match policy {
        PhasePolicy::DiscreteAnchor => "discrete",
        PhasePolicy::ContinuousModulo => "continuous",
    }
}

fn parse_arg<T: std::str::FromStr + Copy>(args: &[String], flag: &str, default: T) -> T {
    args.windows(2)
        .find(|w| w[0] == flag)
        .and_then(|w| w[1].parse().ok())
        .unwrap_or(default)
}
