//! Coin Dash entry point
//!
//! Native builds run the headless frontend: the game plays itself (or sits
//! idle with `"autopilot": false`) until the tick budget runs out, then a
//! summary of the run is printed.

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use std::time::{SystemTime, UNIX_EPOCH};

    use coin_dash::consts::{SCREEN_HEIGHT, SCREEN_WIDTH, WINDOW_TITLE};
    use coin_dash::platform::{self, HeadlessFrontend};
    use coin_dash::sim::GameState;
    use coin_dash::Settings;

    env_logger::init();

    let settings = Settings::load();
    let seed = settings.seed.unwrap_or_else(|| {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs())
            .unwrap_or_default()
    });

    log::info!(
        "{WINDOW_TITLE} ({SCREEN_WIDTH}x{SCREEN_HEIGHT}, headless) starting with seed {seed}"
    );

    let mut state = match GameState::with_tuning(seed, settings.tuning.clone()) {
        Ok(state) => state,
        Err(e) => {
            log::error!("Invalid tuning: {e}");
            return;
        }
    };
    let mut frontend = HeadlessFrontend::new(settings.max_ticks);

    let summary = platform::run(&mut state, &mut frontend, &settings);

    println!("{WINDOW_TITLE} run (seed {seed})");
    println!("  ticks:           {}", summary.ticks);
    println!("  frames:          {}", summary.frames);
    println!("  triangles drawn: {}", frontend.triangles_presented);
    println!("  best level:      {}", summary.best_level);
    println!("  levels cleared:  {}", summary.levels_advanced);
    println!("  level restarts:  {}", summary.level_resets);
    println!("  coins collected: {}", summary.coins_collected);
    println!("  wins:            {}", summary.wins);
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // No browser frontend yet; the library is driven by the host page
}
