//! Spiller av en innspilt skjelett-strøm (JSON-lines) gjennom motoren.
//!
//! Bruk: biomech-replay <frames.jsonl> [exercise_id] [state.json]
//! Hver linje: { "t": sekunder, "landmarks": [ {"x":..,"y":..} | null, ... ] }

use std::fs::File;
use std::io::{BufRead, BufReader};

use anyhow::{bail, Context, Result};
use chrono::{DateTime, Duration, Utc};
use serde::Deserialize;

use biomech_core::cli::print_session_report;
use biomech_core::config::EngineConfig;
use biomech_core::engine::EngineContext;
use biomech_core::models::Skeleton;
use biomech_core::storage::{load_state, save_state, PersistedState};

#[derive(Debug, Deserialize)]
struct FrameLine {
    t: f64,
    landmarks: Skeleton,
}

fn at(base: DateTime<Utc>, secs: f64) -> DateTime<Utc> {
    base + Duration::milliseconds((secs * 1000.0).round() as i64)
}

fn main() -> Result<()> {
    let mut args = std::env::args().skip(1);
    let Some(frames_path) = args.next() else {
        bail!("bruk: biomech-replay <frames.jsonl> [exercise_id] [state.json]");
    };
    let exercise = args.next().unwrap_or_else(|| "squat".to_string());
    let state_path = args.next();

    let state = match &state_path {
        Some(p) => load_state(p).with_context(|| format!("kunne ikke lese tilstand fra {p}"))?,
        None => PersistedState::default(),
    };

    let mut engine = EngineContext::new(EngineConfig::default(), state);
    engine.set_unlock_callback(Box::new(|a| println!("{} Achievement unlocked: {}", a.icon, a.name)));
    engine
        .select_exercise(&exercise)
        .with_context(|| format!("ukjent øvelse '{exercise}'"))?;

    let base = Utc::now();
    let file = File::open(&frames_path).with_context(|| format!("kunne ikke åpne {frames_path}"))?;
    engine.start(base)?;

    let mut last_t = 0.0_f64;
    for (i, line) in BufReader::new(file).lines().enumerate() {
        let line = line.with_context(|| format!("lesefeil på linje {}", i + 1))?;
        if line.trim().is_empty() {
            continue;
        }
        let frame: FrameLine = serde_json::from_str(&line)
            .with_context(|| format!("ugyldig frame på linje {}", i + 1))?;
        last_t = last_t.max(frame.t);
        if let Some(out) = engine.process_frame(&frame.landmarks, at(base, frame.t)) {
            if let Some(rep) = out.rep {
                println!("[{:>7.2}s] rep {} (score {})", frame.t, rep.count, out.analysis.score);
            }
        }
    }

    let Some(outcome) = engine.stop(at(base, last_t)) else {
        bail!("økten var ikke aktiv ved stopp");
    };
    print_session_report(&outcome.session, engine.scores());

    if let Some(p) = &state_path {
        save_state(engine.state(), p).with_context(|| format!("kunne ikke lagre tilstand til {p}"))?;
    }
    Ok(())
}
