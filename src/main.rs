//! Lane Shooter entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::{Rc, Weak};
    use wasm_bindgen::prelude::*;
    use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

    use lane_shooter::audio::AudioManager;
    use lane_shooter::consts::*;
    use lane_shooter::platform::DeviceClass;
    use lane_shooter::platform::web::WebPlatform;
    use lane_shooter::renderer::{CanvasPainter, Starfield, draw_list};
    use lane_shooter::sim::{Session, SessionStatus};
    use lane_shooter::{Game, Settings};

    /// Game instance holding all state
    struct App {
        game: Game<WebPlatform, AudioManager>,
        painter: CanvasPainter,
        stars: Starfield,
    }

    impl App {
        fn on_frame(&mut self, time: f64) {
            self.game.on_frame(time);
            self.render();
            self.update_hud();
        }

        /// Render the current frame
        fn render(&self) {
            let shapes = draw_list(&self.game.snapshot(), &self.stars);
            self.painter.paint(&shapes);
        }

        /// Update HUD elements in DOM
        fn update_hud(&self) {
            let Some(document) = web_sys::window().and_then(|w| w.document()) else {
                return;
            };
            let session = self.game.session();

            if let Some(el) = document.get_element_by_id("score") {
                el.set_text_content(Some(&session.score.to_string()));
            }

            // Start button only while not playing
            if let Some(btn) = document.get_element_by_id("start-btn") {
                match session.status {
                    SessionStatus::Active => {
                        let _ = btn.set_attribute("class", "hidden");
                    }
                    SessionStatus::Idle => {
                        let _ = btn.set_attribute("class", "");
                        btn.set_text_content(Some("Start Game"));
                    }
                    SessionStatus::GameOver => {
                        let _ = btn.set_attribute("class", "");
                        btn.set_text_content(Some("Play Again"));
                    }
                }
            }
        }
    }

    pub fn run() -> Option<()> {
        console_error_panic_hook::set_once();
        if console_log::init_with_level(log::Level::Info).is_err() {
            web_sys::console::log_1(&"Logger already initialized".into());
        }

        log::info!("Lane Shooter starting...");

        let window = web_sys::window()?;
        let document = window.document()?;

        let canvas: HtmlCanvasElement = document.get_element_by_id("canvas")?.dyn_into().ok()?;
        canvas.set_width(PLAYFIELD_WIDTH as u32);
        canvas.set_height(PLAYFIELD_HEIGHT as u32);
        let ctx: CanvasRenderingContext2d = canvas.get_context("2d").ok()??.dyn_into().ok()?;

        let settings = Settings::load();
        let viewport = window.inner_width().ok()?.as_f64().unwrap_or(f64::MAX);
        let device = DeviceClass::from_viewport_width(viewport);
        let scheme = settings.resolve_scheme(device);
        let seed = settings.seed.unwrap_or_else(|| js_sys::Date::now() as u64);
        log::info!(
            "Device {:?}, {} controls, seed {}",
            device,
            scheme.as_str(),
            seed
        );

        let platform = WebPlatform::new(window.clone(), canvas.clone().into());
        let game = Game::new(
            Session::new(scheme, seed),
            platform,
            AudioManager::from_settings(&settings),
        );
        let app = Rc::new(RefCell::new(App {
            game,
            painter: CanvasPainter::new(ctx),
            stars: Starfield::new(seed ^ 0x5eed),
        }));

        install_callbacks(&app);
        setup_start_button(&app);
        setup_page_hide(&app);

        app.borrow().render();
        app.borrow().update_hud();
        log::info!("Lane Shooter ready");
        Some(())
    }

    fn install_callbacks(app: &Rc<RefCell<App>>) {
        let frame_app: Weak<RefCell<App>> = Rc::downgrade(app);
        let input_app: Weak<RefCell<App>> = Rc::downgrade(app);
        app.borrow_mut().game.platform_mut().install(
            move |time: f64| {
                if let Some(app) = frame_app.upgrade() {
                    app.borrow_mut().on_frame(time);
                }
            },
            move |event| {
                if let Some(app) = input_app.upgrade() {
                    app.borrow_mut().game.handle_input(event);
                }
            },
        );
    }

    fn setup_start_button(app: &Rc<RefCell<App>>) {
        let Some(btn) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id("start-btn"))
        else {
            log::warn!("No start button found");
            return;
        };

        let app = app.clone();
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::MouseEvent| {
            let mut a = app.borrow_mut();
            // Browsers only allow audio after a user gesture
            a.game.sink().resume();
            a.game.start();
            a.render();
            a.update_hud();
        });
        let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    /// Navigating away tears the run down (frame + listeners)
    fn setup_page_hide(app: &Rc<RefCell<App>>) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let app = app.clone();
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
            if let Ok(mut a) = app.try_borrow_mut() {
                if a.game.session().is_active() {
                    a.game.stop();
                }
            }
        });
        let _ = window.add_event_listener_with_callback("pagehide", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    if wasm_game::run().is_none() {
        log::error!("Failed to initialize game");
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Lane Shooter (native) starting...");
    log::info!("Native mode runs a headless autopilot - use `trunk serve` for the web version");

    let seed = std::env::args()
        .nth(1)
        .and_then(|s| s.parse().ok())
        .unwrap_or(0x1a5e_5eed);
    let summary = headless::run(seed, 60 * 60 * 5);
    println!(
        "Seed {}: score {} (level {}) after {} ticks, {} shots fired",
        seed, summary.score, summary.level, summary.ticks, summary.shots
    );
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

#[cfg(not(target_arch = "wasm32"))]
mod headless {
    use lane_shooter::Game;
    use lane_shooter::consts::NOMINAL_FRAME_MS;
    use lane_shooter::platform::{InputEvent, ManualPlatform};
    use lane_shooter::sim::{ControlScheme, GameEvent, LogicalKey, Session, TickOutcome};

    pub struct Summary {
        pub score: u32,
        pub level: u32,
        pub ticks: u64,
        pub shots: usize,
    }

    /// Play one session at the nominal frame rate with a simple autopilot:
    /// hold fire and steer toward the lane of the lowest enemy.
    pub fn run(seed: u64, max_ticks: u64) -> Summary {
        let session = Session::new(ControlScheme::Keyboard, seed);
        let mut game = Game::new(session, ManualPlatform::new(), Vec::<GameEvent>::new());
        game.start();
        game.handle_input(InputEvent::KeyDown(LogicalKey::Fire));

        let mut time = 0.0;
        let mut steering: Option<LogicalKey> = None;
        while game.platform_mut().take_frame().is_some() {
            time += NOMINAL_FRAME_MS;

            let wanted = steer(game.session());
            if wanted != steering {
                if let Some(key) = steering {
                    game.handle_input(InputEvent::KeyUp(key));
                }
                if let Some(key) = wanted {
                    game.handle_input(InputEvent::KeyDown(key));
                }
                steering = wanted;
            }

            if game.on_frame(time) == TickOutcome::GameOver
                || game.session().time_ticks >= max_ticks
            {
                break;
            }
        }

        let session = game.session();
        let summary = Summary {
            score: session.score,
            level: session.difficulty_level(),
            ticks: session.time_ticks,
            shots: game
                .sink()
                .iter()
                .filter(|e| matches!(e, GameEvent::Fired { .. }))
                .count(),
        };
        game.stop();
        summary
    }

    fn steer(session: &Session) -> Option<LogicalKey> {
        let target = session
            .enemies
            .iter()
            .max_by(|a, b| a.pos.y.total_cmp(&b.pos.y))?
            .lane;
        match target.cmp(&session.lane) {
            std::cmp::Ordering::Less => Some(LogicalKey::LaneLeft),
            std::cmp::Ordering::Greater => Some(LogicalKey::LaneRight),
            std::cmp::Ordering::Equal => None,
        }
    }
}
