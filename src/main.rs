//! Circle Shooter entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{HtmlCanvasElement, KeyboardEvent, MouseEvent};

    use circle_shooter::Settings;
    use circle_shooter::audio::AudioManager;
    use circle_shooter::driver::FrameDriver;
    use circle_shooter::platform::CanvasSurface;
    use circle_shooter::sim::Game;

    /// Everything the animation frame callback needs
    struct App {
        driver: FrameDriver<AudioManager>,
        surface: CanvasSurface,
    }

    impl App {
        /// Size the canvas to the window, then run one frame
        fn frame(&mut self, time: f64) {
            if let Some(window) = web_sys::window() {
                let w = window.inner_width().ok().and_then(|v| v.as_f64());
                let h = window.inner_height().ok().and_then(|v| v.as_f64());
                if let (Some(w), Some(h)) = (w, h) {
                    self.surface.resize(w as u32, h as u32);
                }
            }
            self.driver.frame(time, &mut self.surface);
        }
    }

    pub fn run() {
        console_error_panic_hook::set_once();
        if console_log::init_with_level(log::Level::Info).is_err() {
            web_sys::console::warn_1(&"Logger already initialized".into());
        }

        log::info!("Circle Shooter starting...");

        let Some(window) = web_sys::window() else {
            log::error!("No window");
            return;
        };
        let Some(document) = window.document() else {
            log::error!("No document");
            return;
        };

        let Some(canvas) = document
            .get_element_by_id("canvas")
            .and_then(|el| el.dyn_into::<HtmlCanvasElement>().ok())
        else {
            log::error!("No #canvas element");
            return;
        };

        let Some(surface) = CanvasSurface::new(canvas) else {
            log::error!("Canvas has no 2D context");
            return;
        };

        // Initialize game
        let seed = js_sys::Date::now() as u64;
        let game = match Game::new(seed) {
            Ok(game) => game,
            Err(e) => {
                log::error!("Failed to start: {}", e);
                return;
            }
        };
        log::info!("Game initialized with seed: {}", seed);

        let settings = Settings::load();
        let audio = AudioManager::new(&settings);
        let app = Rc::new(RefCell::new(App {
            driver: FrameDriver::new(game, settings, audio),
            surface,
        }));

        setup_input_handlers(&window, app.clone());

        // Start game loop
        request_animation_frame(app);

        log::info!("Circle Shooter running!");
    }

    fn setup_input_handlers(window: &web_sys::Window, app: Rc<RefCell<App>>) {
        // Key down
        {
            let app = app.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                if app.borrow_mut().driver.key_down(&event.code()) {
                    event.prevent_default();
                }
            });
            let _ = window
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Key up
        {
            let app = app.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                if app.borrow_mut().driver.key_up(&event.code()) {
                    event.prevent_default();
                }
            });
            let _ = window
                .add_event_listener_with_callback("keyup", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Mouse press - shoot toward the cursor
        {
            let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
                app.borrow_mut()
                    .driver
                    .click(event.client_x() as f32, event.client_y() as f32);
            });
            let _ = window
                .add_event_listener_with_callback("mousedown", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn request_animation_frame(app: Rc<RefCell<App>>) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let closure = Closure::once(move |time: f64| {
            game_loop(app, time);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn game_loop(app: Rc<RefCell<App>>, time: f64) {
        app.borrow_mut().frame(time);
        request_animation_frame(app);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    wasm_game::run();
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Circle Shooter (native) starting...");
    log::info!("Native mode runs headless - serve the wasm build for the playable version");

    if let Err(e) = headless_session() {
        log::error!("Headless session failed: {}", e);
        std::process::exit(1);
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

/// Scripted session: learn the controls, then hold still and fire around until death
#[cfg(not(target_arch = "wasm32"))]
fn headless_session() -> Result<(), circle_shooter::ColorParseError> {
    use circle_shooter::Settings;
    use circle_shooter::audio::SilentPlayer;
    use circle_shooter::driver::FrameDriver;
    use circle_shooter::renderer::RecordingSurface;
    use circle_shooter::sim::Game;

    const FRAME_MS: f64 = 1000.0 / 60.0;
    const MAX_FRAMES: u32 = 60 * 120;

    let seed = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0);
    let game = Game::new(seed)?;
    log::info!("Game initialized with seed: {}", seed);

    let mut driver = FrameDriver::new(game, Settings::load(), SilentPlayer);
    let mut surface = RecordingSurface::new(1280.0, 720.0);

    driver.key_down("KeyW");
    driver.key_up("KeyW");

    let mut frames = 0;
    while frames < MAX_FRAMES && driver.game.player.is_alive() {
        // Sweep the aim around the screen centre, a few shots per second
        if frames % 10 == 0 {
            let angle = frames as f32 * 0.05;
            let aim = circle_shooter::polar_to_cartesian(200.0, angle);
            driver.click(640.0 + aim.x, 360.0 + aim.y);
        }
        driver.frame(frames as f64 * FRAME_MS, &mut surface);
        frames += 1;
    }

    log::info!(
        "Session over after {:.1}s: score {}, health {}, {} enemies on screen, {} draw calls last frame",
        frames as f64 * FRAME_MS / 1000.0,
        driver.game.score,
        driver.game.player.health(),
        driver.game.enemies.len(),
        surface.commands.len(),
    );
    Ok(())
}
