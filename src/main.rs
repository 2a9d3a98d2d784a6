//! Flappy Card entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{HtmlCanvasElement, KeyboardEvent, MouseEvent, TouchEvent};

    use flappy_card::audio::{AudioManager, SoundEffect};
    use flappy_card::bestscore::BestScore;
    use flappy_card::renderer::{self, CanvasSurface};
    use flappy_card::sim::{GameEvent, GameState, TickInput, tick};

    /// Game instance holding all state
    struct Game {
        state: GameState,
        surface: CanvasSurface,
        audio: AudioManager,
        best: BestScore,
        input: TickInput,
        canvas: HtmlCanvasElement,
    }

    impl Game {
        fn new(
            seed: u64,
            surface: CanvasSurface,
            canvas: HtmlCanvasElement,
            width: f32,
            height: f32,
        ) -> Self {
            Self {
                state: GameState::new(seed, width, height),
                surface,
                audio: AudioManager::new(),
                best: BestScore::load(),
                input: TickInput::default(),
                canvas,
            }
        }

        /// One display refresh: apply latched input, advance the simulation a
        /// single tick, fan events out to the presentation layer, repaint.
        fn frame(&mut self) {
            let input = std::mem::take(&mut self.input);
            let events = tick(&mut self.state, &input);
            for event in events {
                self.dispatch(event);
            }
            renderer::draw(&self.state, &mut self.surface);
        }

        fn dispatch(&mut self, event: GameEvent) {
            match event {
                GameEvent::RunStarted => {
                    set_class("start-screen", "hidden");
                    set_class("game-over-screen", "hidden");
                    set_style("score-display", "display: block");
                    set_text("score-display", "0");
                }
                GameEvent::Jumped => self.audio.play(SoundEffect::Jump),
                GameEvent::Scored { score } => {
                    self.audio.play(SoundEffect::Score);
                    set_text("score-display", &score.to_string());
                }
                GameEvent::Crashed { score } => {
                    self.audio.play(SoundEffect::Crash);
                    if self.best.submit(score) {
                        log::info!("New best score: {score}");
                    }
                    set_text("final-score", &score.to_string());
                    set_text("best-score", &self.best.score.to_string());
                    set_style("score-display", "display: none");
                    set_class("game-over-screen", "active");
                }
            }
        }

        /// Fit the canvas to its container. Runs between frames, so the field
        /// change never tears a tick in half.
        fn resize(&mut self) {
            let Some(document) = web_sys::window().and_then(|w| w.document()) else {
                return;
            };
            let Some(container) = document.get_element_by_id("game-container") else {
                return;
            };
            let width = container.client_width().max(1) as u32;
            let height = container.client_height().max(1) as u32;
            self.canvas.set_width(width);
            self.canvas.set_height(height);
            self.state.set_field_size(width as f32, height as f32);
        }
    }

    fn set_text(id: &str, text: &str) {
        if let Some(el) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(id))
        {
            el.set_text_content(Some(text));
        }
    }

    fn set_class(id: &str, class: &str) {
        if let Some(el) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(id))
        {
            let _ = el.set_attribute("class", class);
        }
    }

    fn set_style(id: &str, style: &str) {
        if let Some(el) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(id))
        {
            let _ = el.set_attribute("style", style);
        }
    }

    pub fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Flappy Card starting...");

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("game-canvas")
            .expect("no canvas")
            .dyn_into()
            .expect("not a canvas");

        // Size canvas to its container
        let (width, height) = match document.get_element_by_id("game-container") {
            Some(container) => (
                container.client_width().max(1) as u32,
                container.client_height().max(1) as u32,
            ),
            None => (canvas.width(), canvas.height()),
        };
        canvas.set_width(width);
        canvas.set_height(height);

        let ctx = canvas
            .get_context("2d")
            .ok()
            .flatten()
            .expect("no 2d context")
            .dyn_into::<web_sys::CanvasRenderingContext2d>()
            .expect("not a 2d context");
        let surface = CanvasSurface::new(ctx);

        let seed = js_sys::Date::now() as u64;
        let game = Rc::new(RefCell::new(Game::new(
            seed,
            surface,
            canvas.clone(),
            width as f32,
            height as f32,
        )));

        log::info!("Game initialized with seed: {seed}");

        // Show the stored best before the first run
        set_text("best-score", &game.borrow().best.score.to_string());

        setup_input_handlers(&canvas, game.clone());

        request_animation_frame(game);

        log::info!("Flappy Card running!");
    }

    fn setup_input_handlers(canvas: &HtmlCanvasElement, game: Rc<RefCell<Game>>) {
        let window = web_sys::window().unwrap();
        let document = window.document().unwrap();

        // Keyboard jump
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                if event.code() == "Space" {
                    game.borrow_mut().input.jump = true;
                }
            });
            let _ = window
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Mouse jump
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
                game.borrow_mut().input.jump = true;
            });
            let _ = canvas
                .add_event_listener_with_callback("mousedown", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Touch jump
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: TouchEvent| {
                event.prevent_default();
                game.borrow_mut().input.jump = true;
            });
            let _ = canvas
                .add_event_listener_with_callback("touchstart", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Start button
        if let Some(btn) = document.get_element_by_id("start-btn") {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
                game.borrow_mut().input.start = true;
            });
            let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Restart button
        if let Some(btn) = document.get_element_by_id("restart-btn") {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
                game.borrow_mut().input.restart = true;
            });
            let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Viewport resize
        {
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
                game.borrow_mut().resize();
            });
            let _ = window
                .add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn request_animation_frame(game: Rc<RefCell<Game>>) {
        let window = web_sys::window().unwrap();
        let closure = Closure::once(move |_time: f64| {
            game_loop(game);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn game_loop(game: Rc<RefCell<Game>>) {
        game.borrow_mut().frame();
        request_animation_frame(game);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    wasm_game::run();
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use flappy_card::sim::{GameEvent, GameState, TickInput, tick};

    env_logger::init();
    log::info!("Flappy Card (native) starting...");

    // Headless autopilot run: flap whenever the card sinks below the nearest
    // gap, report the final score.
    let mut state = GameState::new(1984, 480.0, 400.0);
    tick(
        &mut state,
        &TickInput {
            start: true,
            ..Default::default()
        },
    );

    for _ in 0..20_000u32 {
        let jump = state.card.as_ref().is_some_and(|card| {
            let target = state
                .obstacles
                .iter()
                .find(|obs| !obs.passed && obs.right() > card.pos.x)
                .map(|obs| obs.gap_top() + obs.gap / 2.0)
                .unwrap_or(state.field.y / 2.0);
            card.pos.y + card.size.y > target && card.vel > 0.0
        });

        let events = tick(
            &mut state,
            &TickInput {
                jump,
                ..Default::default()
            },
        );
        if events
            .iter()
            .any(|e| matches!(e, GameEvent::Crashed { .. }))
        {
            break;
        }
    }

    println!("Autopilot run finished with score {}", state.score);
}
