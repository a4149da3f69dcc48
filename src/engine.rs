//! Match engine
//!
//! `Engine` exclusively owns one match: its state, the held keys and the
//! started flag. Hosts feed it key events and frame timestamps and hand it a
//! canvas to paint on. `FrameLoop` is the run-while-active driver the host
//! calls once per animation frame.

use rand::SeedableRng;
use rand_pcg::Pcg32;

use crate::consts::MAX_FRAME_DT;
use crate::input::{KeyAction, classify, suppresses_default};
use crate::options::MatchConfig;
use crate::renderer::{Canvas2d, StatusLine, build_frame, draw};
use crate::sim::{self, InputState, MatchState, Phase, Playfield};
use crate::theme::ThemeColors;

/// Host UI reacting to the match start (hide an overlay, drop button focus)
pub trait StartUi {
    fn on_start(&mut self);
}

pub struct Engine {
    state: MatchState,
    input: InputState,
    /// Gates AI, ball and scoring. Set once, never cleared.
    started: bool,
    field: Playfield,
    config: MatchConfig,
    colors: ThemeColors,
    rng: Pcg32,
    start_ui: Option<Box<dyn StartUi>>,
}

impl Engine {
    /// Create an engine with a fresh match, not yet started
    pub fn new(field: Playfield, config: MatchConfig, colors: ThemeColors, seed: u64) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let mut state = MatchState::new(&field);
        sim::reset_match(&mut state, &field, &config, &mut rng);

        log::info!(
            "Pong engine ready: {}x{} court, first to {}, serve delay {:.2}s",
            field.width,
            field.height,
            config.winning_score,
            config.serve_delay
        );

        Self {
            state,
            input: InputState::default(),
            started: false,
            field,
            config,
            colors,
            rng,
            start_ui: None,
        }
    }

    /// Attach the host's start affordance
    pub fn with_start_ui(mut self, ui: Box<dyn StartUi>) -> Self {
        self.start_ui = Some(ui);
        self
    }

    pub fn state(&self) -> &MatchState {
        &self.state
    }

    pub fn input(&self) -> InputState {
        self.input
    }

    pub fn started(&self) -> bool {
        self.started
    }

    pub fn field(&self) -> &Playfield {
        &self.field
    }

    pub fn phase(&self) -> Phase {
        Phase::of(&self.state, self.started)
    }

    pub fn status(&self) -> StatusLine {
        StatusLine::for_match(&self.state, self.started)
    }

    /// Advance the simulation by `dt` seconds
    pub fn update(&mut self, dt: f32) {
        sim::tick(
            &mut self.state,
            &self.input,
            self.started,
            &self.field,
            &self.config,
            &mut self.rng,
            dt,
        );
    }

    /// Paint the whole court
    pub fn render<C: Canvas2d + ?Sized>(&self, canvas: &mut C) {
        let commands = build_frame(&self.state, self.status(), &self.field, &self.colors);
        draw(canvas, &commands);
    }

    /// Start the match. Only the first call has any effect.
    pub fn start(&mut self) {
        if self.started {
            return;
        }
        self.started = true;
        if let Some(ui) = self.start_ui.as_mut() {
            ui.on_start();
        }
        log::info!("Match started");
    }

    /// Begin a new match; only allowed once the current one has a winner
    pub fn restart(&mut self) -> bool {
        if self.state.winner.is_none() {
            return false;
        }
        sim::reset_match(&mut self.state, &self.field, &self.config, &mut self.rng);
        log::info!("Match restarted, serving {:?}", self.state.serve_direction);
        true
    }

    /// Handle a key press. Returns true if the host should suppress the key's default action.
    pub fn handle_key_down(&mut self, key: &str) -> bool {
        let action = classify(key);
        if !self.started && matches!(action, KeyAction::Up | KeyAction::Down) {
            self.start();
        }

        match action {
            KeyAction::Up => self.input.up = true,
            KeyAction::Down => self.input.down = true,
            KeyAction::Restart => {
                self.restart();
            }
            KeyAction::None => {}
        }

        suppresses_default(key)
    }

    /// Handle a key release. Returns true if the host should suppress the key's default action.
    pub fn handle_key_up(&mut self, key: &str) -> bool {
        match classify(key) {
            KeyAction::Up => self.input.up = false,
            KeyAction::Down => self.input.down = false,
            _ => {}
        }
        suppresses_default(key)
    }

    /// Window lost focus; key-up events may never arrive
    pub fn handle_blur(&mut self) {
        self.input.clear();
    }
}

/// Turns animation-frame timestamps into bounded simulation steps
#[derive(Debug, Clone, Copy, Default)]
pub struct FrameClock {
    last_ms: Option<f64>,
}

impl FrameClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seconds since the previous frame, at most `MAX_FRAME_DT`.
    /// The first frame only sets the baseline and yields 0.
    pub fn advance(&mut self, now_ms: f64) -> f32 {
        let last = self.last_ms.unwrap_or(now_ms);
        self.last_ms = Some(now_ms);
        (((now_ms - last) / 1000.0) as f32).clamp(0.0, MAX_FRAME_DT)
    }
}

/// Frame driver: update then render while running
#[derive(Debug, Clone)]
pub struct FrameLoop {
    running: bool,
    clock: FrameClock,
    /// Host id of the frame request currently queued
    pending: Option<i32>,
}

impl Default for FrameLoop {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameLoop {
    pub fn new() -> Self {
        Self {
            running: true,
            clock: FrameClock::new(),
            pending: None,
        }
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Run one frame. Returns whether the host should request another.
    pub fn frame<C: Canvas2d + ?Sized>(
        &mut self,
        engine: &mut Engine,
        canvas: &mut C,
        now_ms: f64,
    ) -> bool {
        self.pending = None;
        if !self.running {
            return false;
        }
        let dt = self.clock.advance(now_ms);
        engine.update(dt);
        engine.render(canvas);
        true
    }

    /// Remember the id of the frame the host just queued
    pub fn set_pending(&mut self, id: i32) {
        self.pending = Some(id);
    }

    /// Stop the loop. Returns the queued frame id, if any, for the host to cancel.
    pub fn stop(&mut self) -> Option<i32> {
        self.running = false;
        self.pending.take()
    }
}
