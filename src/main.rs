//! Canvas Pong entry point
//!
//! On the web the library is mounted from JavaScript via `initPong`. Natively
//! this runs a headless match between a scripted player and the AI.

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use canvas_pong::renderer::RecordingCanvas;
    use canvas_pong::sim::{Phase, Playfield};
    use canvas_pong::{Engine, FrameLoop, MatchConfig, PongOptions, ThemeColors};

    env_logger::init();

    let mut args = std::env::args().skip(1);
    let seed = args.next().and_then(|s| s.parse().ok()).unwrap_or(7);
    let options = PongOptions::from_json(&args.next().unwrap_or_default());

    log::info!("Canvas Pong (native) starting headless match, seed {}", seed);

    let mut engine = Engine::new(
        Playfield::default(),
        MatchConfig::from_options(&options),
        ThemeColors::default(),
        seed,
    );
    let mut canvas = RecordingCanvas::new();
    let mut frames = FrameLoop::new();
    // Same as pressing the start button
    engine.start();

    // Simulated 60 Hz frames, capped at ten minutes of play
    let frame_ms = 1000.0 / 60.0;
    let max_frames = 60 * 60 * 10;
    let mut now = 0.0;
    let mut held: Option<&str> = None;

    for _ in 0..max_frames {
        // Scripted player: chase the ball with a sloppy tolerance
        let state = engine.state();
        let paddle_center = state.left_y + canvas_pong::consts::PADDLE_HEIGHT / 2.0;
        let error = state.ball_pos.y - paddle_center;
        let wanted = if error < -20.0 {
            Some("w")
        } else if error > 20.0 {
            Some("s")
        } else {
            None
        };
        if wanted != held {
            if let Some(key) = held {
                engine.handle_key_up(key);
            }
            if let Some(key) = wanted {
                engine.handle_key_down(key);
            }
            held = wanted;
        }

        canvas.clear();
        frames.frame(&mut engine, &mut canvas, now);
        now += frame_ms;

        if engine.phase() == Phase::MatchOver {
            break;
        }
    }

    let state = engine.state();
    match state.winner {
        Some(winner) => log::info!(
            "{:?} won {}-{} after {:.1}s",
            winner,
            state.left_score,
            state.right_score,
            now / 1000.0
        ),
        None => log::info!(
            "No winner after {:.1}s, score {}-{}",
            now / 1000.0,
            state.left_score,
            state.right_score
        ),
    }
    if let Some(status) = canvas.texts().last() {
        println!("{}", status);
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is `initPong` in the library
}
