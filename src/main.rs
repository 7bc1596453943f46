//! Orb Dash entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, KeyboardEvent};

    use orb_dash::score_label;
    use orb_dash::sim::{DirectionInput, GameEvent, Session, TickInput, TickOutcome, tick};

    const BACKGROUND: &str = "#0b0f14";
    const PLAYER_COLOR: &str = "#4cc9f0";
    const ORB_COLOR: &str = "#80ff72";
    const HAZARD_COLOR: &str = "#ff4d6d";

    /// Game instance holding all state
    struct Game {
        session: Session,
        ctx: CanvasRenderingContext2d,
        directions: DirectionInput,
        last_time: Option<f64>,
    }

    impl Game {
        /// Run one simulation tick for this frame
        fn update(&mut self, time: f64) {
            let delta_ms = self.last_time.map(|last| (time - last) as f32).unwrap_or(0.0);
            self.last_time = Some(time);

            let input = TickInput {
                time_ms: time,
                delta_ms,
                directions: self.directions,
            };
            if tick(&mut self.session, &input) == TickOutcome::Reset {
                log::info!("Hazard hit, session restarted");
            }
        }

        /// Push score changes to the HUD text
        fn update_hud(&mut self) {
            let Some(document) = web_sys::window().and_then(|w| w.document()) else {
                return;
            };
            for event in self.session.drain_events() {
                let GameEvent::ScoreChanged { score } = event;
                if let Some(el) = document.get_element_by_id("score") {
                    el.set_text_content(Some(&score_label(score)));
                }
            }
        }

        /// Draw the current frame
        fn render(&self) {
            let config = self.session.config();
            let ctx = &self.ctx;

            ctx.set_fill_style_str(BACKGROUND);
            ctx.fill_rect(0.0, 0.0, config.arena_width as f64, config.arena_height as f64);

            let player = self.session.player();
            let size = config.player_size as f64;
            ctx.set_fill_style_str(PLAYER_COLOR);
            ctx.fill_rect(
                player.pos.x as f64 - size / 2.0,
                player.pos.y as f64 - size / 2.0,
                size,
                size,
            );

            for (entities, color) in [
                (self.session.orbs(), ORB_COLOR),
                (self.session.hazards(), HAZARD_COLOR),
            ] {
                ctx.set_fill_style_str(color);
                for entity in entities {
                    ctx.begin_path();
                    let _ = ctx.arc(
                        entity.pos.x as f64,
                        entity.pos.y as f64,
                        entity.radius as f64,
                        0.0,
                        std::f64::consts::TAU,
                    );
                    ctx.fill();
                }
            }
        }

        fn set_key(&mut self, key: &str, pressed: bool) {
            match key {
                "ArrowLeft" => self.directions.left = pressed,
                "ArrowRight" => self.directions.right = pressed,
                "ArrowUp" => self.directions.up = pressed,
                "ArrowDown" => self.directions.down = pressed,
                _ => {}
            }
        }
    }

    fn setup_input_handlers(game: Rc<RefCell<Game>>) -> Result<(), JsValue> {
        let window = web_sys::window().ok_or("no window")?;

        for (event_name, pressed) in [("keydown", true), ("keyup", false)] {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(KeyboardEvent)>::new(move |e: KeyboardEvent| {
                game.borrow_mut().set_key(&e.key(), pressed);
            });
            window.add_event_listener_with_callback(event_name, closure.as_ref().unchecked_ref())?;
            closure.forget();
        }
        Ok(())
    }

    fn request_animation_frame(game: Rc<RefCell<Game>>) {
        let closure = Closure::once_into_js(move |time: f64| game_loop(game, time));
        if let Some(window) = web_sys::window() {
            let _ = window.request_animation_frame(closure.unchecked_ref());
        }
    }

    fn game_loop(game: Rc<RefCell<Game>>, time: f64) {
        {
            let mut g = game.borrow_mut();
            g.update(time);
            g.update_hud();
            g.render();
        }
        request_animation_frame(game);
    }

    pub fn run() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info)
            .map_err(|e| JsValue::from_str(&e.to_string()))?;

        log::info!("Orb Dash starting...");

        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or("no document")?;
        let canvas: HtmlCanvasElement = document
            .get_element_by_id("game")
            .ok_or("no canvas")?
            .dyn_into()?;

        let seed = js_sys::Date::now() as u64;
        let session = Session::with_seed(seed);
        canvas.set_width(session.config().arena_width as u32);
        canvas.set_height(session.config().arena_height as u32);

        let ctx: CanvasRenderingContext2d = canvas
            .get_context("2d")?
            .ok_or("no 2d context")?
            .dyn_into()?;

        log::info!("Game initialized with seed: {}", seed);

        let game = Rc::new(RefCell::new(Game {
            session,
            ctx,
            directions: DirectionInput::default(),
            last_time: None,
        }));

        setup_input_handlers(game.clone())?;
        request_animation_frame(game);
        Ok(())
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() -> Result<(), JsValue> {
    wasm_game::run()
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use orb_dash::sim::{DirectionInput, GameEvent, Session, TickInput, TickOutcome, tick};
    use orb_dash::{SimConfig, score_label};

    env_logger::init();
    log::info!("Orb Dash (native) starting...");
    log::info!("Native mode runs a headless demo - build for wasm32 to play");

    let config = match std::env::args().nth(1) {
        Some(path) => match SimConfig::load(&path) {
            Ok(config) => config,
            Err(e) => {
                log::error!("{}: {}, using defaults", path, e);
                SimConfig::default()
            }
        },
        None => SimConfig::default(),
    };

    // Ten seconds at 60 fps, sweeping left and right
    let mut session = match Session::new(config, 12345) {
        Ok(session) => session,
        Err(e) => {
            log::error!("{}, using defaults", e);
            Session::with_seed(12345)
        }
    };
    let mut best = 0;
    for frame in 0..600u32 {
        let sweep_right = (frame / 90) % 2 == 0;
        let input = TickInput {
            time_ms: frame as f64 * 1000.0 / 60.0,
            delta_ms: 1000.0 / 60.0,
            directions: DirectionInput {
                left: !sweep_right,
                right: sweep_right,
                ..Default::default()
            },
        };
        if tick(&mut session, &input) == TickOutcome::Reset {
            log::info!("Hazard hit on frame {}, session restarted", frame);
        }
        for event in session.drain_events() {
            let GameEvent::ScoreChanged { score } = event;
            log::debug!("{}", score_label(score));
            best = best.max(score);
        }
    }

    log::info!(
        "Demo finished: score {}, best {}, {} resets",
        session.score(),
        best,
        session.resets()
    );
    match serde_json::to_string_pretty(&session.snapshot()) {
        Ok(json) => println!("{}", json),
        Err(e) => log::error!("Failed to serialize snapshot: {}", e),
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}
