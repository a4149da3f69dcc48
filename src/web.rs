//! Browser bindings
//!
//! `initPong` mounts an engine on a canvas, wires keyboard/blur/click
//! listeners and drives it from `requestAnimationFrame`. The returned
//! `PongHandle` must be disposed before the canvas goes away.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use web_sys::{
    CanvasRenderingContext2d, CssStyleDeclaration, EventTarget, HtmlButtonElement,
    HtmlCanvasElement, HtmlElement, KeyboardEvent, Window,
};

use crate::engine::{Engine, FrameLoop, StartUi};
use crate::options::{MatchConfig, PongOptions};
use crate::renderer::canvas::WebCanvas;
use crate::sim::Playfield;
use crate::theme::{StyleSource, ThemeColors};

/// Class toggled on the start overlay once the match begins
const HIDDEN_CLASS: &str = "is-hidden";

#[wasm_bindgen(start)]
pub fn wasm_start() {
    console_error_panic_hook::set_once();
    // Another module on the page may already own the logger
    let _ = console_log::init_with_level(log::Level::Info);
}

/// Computed style of the document root
struct ComputedStyle(Option<CssStyleDeclaration>);

impl ComputedStyle {
    fn of_document(window: &Window) -> Self {
        let style = window
            .document()
            .and_then(|d| d.document_element())
            .and_then(|root| window.get_computed_style(&root).ok().flatten());
        Self(style)
    }
}

impl StyleSource for ComputedStyle {
    fn property(&self, name: &str) -> Option<String> {
        self.0.as_ref()?.get_property_value(name).ok()
    }
}

/// Overlay and button supplied by the page
struct DomStartUi {
    overlay: Option<HtmlElement>,
    button: Option<HtmlButtonElement>,
}

impl StartUi for DomStartUi {
    fn on_start(&mut self) {
        if let Some(overlay) = &self.overlay {
            if let Err(e) = overlay.class_list().add_1(HIDDEN_CLASS) {
                log::warn!("Failed to hide start overlay: {:?}", e);
            }
        }
        if let Some(button) = &self.button {
            if let Err(e) = button.blur() {
                log::warn!("Failed to blur start button: {:?}", e);
            }
        }
    }
}

/// An attached DOM listener, kept so it can be removed again
struct Listener {
    target: EventTarget,
    kind: &'static str,
    closure: Closure<dyn FnMut(web_sys::Event)>,
}

impl Listener {
    fn attach(
        target: EventTarget,
        kind: &'static str,
        closure: Closure<dyn FnMut(web_sys::Event)>,
    ) -> Option<Self> {
        if let Err(e) =
            target.add_event_listener_with_callback(kind, closure.as_ref().unchecked_ref())
        {
            log::warn!("Failed to attach {} listener: {:?}", kind, e);
            return None;
        }
        Some(Self {
            target,
            kind,
            closure,
        })
    }

    fn detach(&self) {
        if let Err(e) = self
            .target
            .remove_event_listener_with_callback(self.kind, self.closure.as_ref().unchecked_ref())
        {
            log::warn!("Failed to remove {} listener: {:?}", self.kind, e);
        }
    }
}

/// Everything the frame and event callbacks mutate
struct Game {
    engine: Engine,
    frames: FrameLoop,
    canvas: WebCanvas,
}

type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>;

struct Mounted {
    window: Window,
    game: Rc<RefCell<Game>>,
    frame_callback: FrameCallback,
    listeners: Vec<Listener>,
}

impl Mounted {
    fn teardown(self) {
        // dispose never runs inside a frame or listener callback, so the game is free
        let pending = self.game.borrow_mut().frames.stop();
        if let Some(id) = pending {
            if let Err(e) = self.window.cancel_animation_frame(id) {
                log::warn!("Failed to cancel animation frame: {:?}", e);
            }
        }
        for listener in &self.listeners {
            listener.detach();
        }
        // Break the callback's reference to itself
        self.frame_callback.borrow_mut().take();
        log::info!("Pong disposed");
    }
}

/// Handle to a mounted game
#[wasm_bindgen]
pub struct PongHandle {
    mounted: Option<Mounted>,
}

#[wasm_bindgen]
impl PongHandle {
    /// Stop the frame loop and remove every listener attached at mount
    pub fn dispose(&mut self) {
        if let Some(mounted) = self.mounted.take() {
            mounted.teardown();
        }
    }
}

/// Mount a game on `canvas`.
///
/// `options_json` may carry `winningScore` and `serveDelayMs`. Without a 2D
/// context the returned handle does nothing.
#[wasm_bindgen(js_name = initPong)]
pub fn init_pong(
    canvas: HtmlCanvasElement,
    options_json: Option<String>,
    start_overlay: Option<HtmlElement>,
    start_button: Option<HtmlButtonElement>,
) -> PongHandle {
    let Some(window) = web_sys::window() else {
        log::warn!("No window; pong disabled");
        return PongHandle { mounted: None };
    };
    let Some(ctx) = canvas
        .get_context("2d")
        .ok()
        .flatten()
        .and_then(|ctx| ctx.dyn_into::<CanvasRenderingContext2d>().ok())
    else {
        log::warn!("Canvas has no 2D context; pong disabled");
        return PongHandle { mounted: None };
    };

    let field = Playfield::new(canvas.width(), canvas.height());
    canvas.set_width(field.width as u32);
    canvas.set_height(field.height as u32);

    let colors = ThemeColors::resolve(&ComputedStyle::of_document(&window));
    let options = PongOptions::from_json(options_json.as_deref().unwrap_or_default());
    let config = MatchConfig::from_options(&options);
    let seed = js_sys::Date::now() as u64;

    let engine = Engine::new(field, config, colors, seed).with_start_ui(Box::new(DomStartUi {
        overlay: start_overlay,
        button: start_button.clone(),
    }));
    let game = Rc::new(RefCell::new(Game {
        engine,
        frames: FrameLoop::new(),
        canvas: WebCanvas::new(ctx),
    }));

    let mut listeners = Vec::new();
    listeners.extend(attach_key_listener(&window, &game, "keydown"));
    listeners.extend(attach_key_listener(&window, &game, "keyup"));
    {
        let game = game.clone();
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
            if let Ok(mut g) = game.try_borrow_mut() {
                g.engine.handle_blur();
            }
        });
        listeners.extend(Listener::attach(window.clone().into(), "blur", closure));
    }
    if let Some(button) = start_button {
        let game = game.clone();
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
            if let Ok(mut g) = game.try_borrow_mut() {
                g.engine.start();
            }
        });
        listeners.extend(Listener::attach(button.into(), "click", closure));
    }

    {
        let mut g = game.borrow_mut();
        let g = &mut *g;
        g.engine.render(&mut g.canvas);
    }

    let frame_callback: FrameCallback = Rc::new(RefCell::new(None));
    {
        let window_c = window.clone();
        let game_c = game.clone();
        let callback_c = frame_callback.clone();
        *frame_callback.borrow_mut() = Some(Closure::new(move |now: f64| {
            let again = match game_c.try_borrow_mut() {
                Ok(mut g) => {
                    let Game {
                        engine,
                        frames,
                        canvas,
                    } = &mut *g;
                    frames.frame(engine, canvas, now)
                }
                // Busy in an event handler; try again next frame
                Err(_) => true,
            };
            if again {
                request_frame(&window_c, &game_c, &callback_c);
            }
        }));
    }
    request_frame(&window, &game, &frame_callback);

    log::info!("Pong mounted");
    PongHandle {
        mounted: Some(Mounted {
            window,
            game,
            frame_callback,
            listeners,
        }),
    }
}

fn attach_key_listener(
    window: &Window,
    game: &Rc<RefCell<Game>>,
    kind: &'static str,
) -> Option<Listener> {
    let game = game.clone();
    let closure = Closure::<dyn FnMut(_)>::new(move |event: web_sys::Event| {
        let Some(key_event) = event.dyn_ref::<KeyboardEvent>() else {
            return;
        };
        let Ok(mut g) = game.try_borrow_mut() else {
            return;
        };
        let key = key_event.key();
        let suppress = if kind == "keydown" {
            g.engine.handle_key_down(&key)
        } else {
            g.engine.handle_key_up(&key)
        };
        if suppress {
            event.prevent_default();
        }
    });
    Listener::attach(window.clone().into(), kind, closure)
}

fn request_frame(window: &Window, game: &Rc<RefCell<Game>>, callback: &FrameCallback) {
    let callback = callback.borrow();
    let Some(closure) = callback.as_ref() else {
        return;
    };
    match window.request_animation_frame(closure.as_ref().unchecked_ref()) {
        Ok(id) => {
            if let Ok(mut g) = game.try_borrow_mut() {
                g.frames.set_pending(id);
            }
        }
        Err(e) => log::warn!("requestAnimationFrame failed: {:?}", e),
    }
}
