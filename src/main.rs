//! Poke entry point
//!
//! The native build runs a headless session driven by the autopilot and
//! prints the results. Usage: `poke [play|practice] [seed] [highscore.json]`

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use poke::audio::{CueMixer, LogSink};
    use poke::consts::FRAME_DT;
    use poke::highscores::{FileStore, HighScoreStore, MemoryStore};
    use poke::results::Results;
    use poke::sim::{Autopilot, GameMode, Session, TickInput, tick};
    use poke::{Settings, Tuning};

    /// Hard stop for practice runs (nobody presses stop in a headless run)
    const PRACTICE_SECONDS: f32 = 60.0;
    const REACTION_TIME: f32 = 0.3;

    env_logger::init();
    log::info!("Poke (native) starting...");

    let mut args = std::env::args().skip(1);
    let mode = match args.next().as_deref() {
        None | Some("play") => GameMode::Play,
        Some("practice") => GameMode::Practice,
        Some(other) => {
            eprintln!("Unknown mode '{}', expected 'play' or 'practice'", other);
            std::process::exit(2);
        }
    };
    let seed = match args.next() {
        Some(s) => match s.parse::<u64>() {
            Ok(seed) => seed,
            Err(_) => {
                eprintln!("Seed must be an unsigned integer, got '{}'", s);
                std::process::exit(2);
            }
        },
        None => rand::random(),
    };
    let mut store: Box<dyn HighScoreStore> = match args.next() {
        Some(path) => Box::new(FileStore::new(path)),
        None => Box::new(MemoryStore::new()),
    };

    let mut session = match Session::new(mode, Tuning::default(), seed) {
        Ok(session) => session,
        Err(e) => {
            eprintln!("Invalid tuning: {}", e);
            std::process::exit(1);
        }
    };
    log::info!("Game initialized with seed: {}", seed);
    println!("Best time so far: {:.2}s", store.get());

    let mut cues = CueMixer::from_settings(LogSink, &Settings::load());
    let mut pilot = Autopilot::new(REACTION_TIME);

    while !session.is_finished() {
        let mut input = TickInput::default();
        if let Some(point) = pilot.next_tap(&session, FRAME_DT) {
            input.taps.push(point);
        }
        if mode == GameMode::Practice && session.stats().elapsed_time >= PRACTICE_SECONDS {
            input.stop = true;
        }
        tick(&mut session, &input, FRAME_DT, &mut cues);
    }

    let Some(end) = session.end() else {
        return;
    };
    match Results::from_end(end, store.as_mut()) {
        Some(results) => {
            for line in results.lines() {
                println!("{}", line);
            }
        }
        None => println!("No results for this mode"),
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM hosts embed the library directly; this is just to satisfy the compiler
}
