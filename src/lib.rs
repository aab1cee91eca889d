use wasm_bindgen::prelude::*;
use web_sys::{HtmlCanvasElement, KeyboardEvent, MouseEvent};

pub mod animation;
pub mod config;
pub mod error;
pub mod interaction;
pub mod math;
pub mod refinement;
pub mod render;

pub use config::AnimatorConfig;
pub use error::{ConfigError, SubdivisionError};
pub use interaction::{Drawable, Input, Interaction, Mode, Outcome};
pub use math::Vec2;

use render::CanvasRenderer;

/// Initialize panic hook and logging
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
    init_logger();
}

#[cfg(feature = "debug_logs")]
fn init_logger() {
    use log::LevelFilter;
    use wasm_bindgen_console_logger::DEFAULT_LOGGER;
    log::set_logger(&DEFAULT_LOGGER).expect("error initializing logger");
    log::set_max_level(LevelFilter::Debug);
}

#[cfg(not(feature = "debug_logs"))]
fn init_logger() {}

/// Host-facing commands bound to keyboard keys
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    Start,
    Exit,
    Reset,
    Clear,
}

impl Command {
    fn from_key(key: &str) -> Option<Self> {
        match key {
            "Enter" => Some(Command::Start),
            "Escape" => Some(Command::Exit),
            "r" | "R" => Some(Command::Reset),
            "c" | "C" => Some(Command::Clear),
            _ => None,
        }
    }
}

/// Main engine state exposed to JavaScript
#[wasm_bindgen]
pub struct ChaikinAnimator {
    config: AnimatorConfig,
    interaction: Interaction,
    renderer: Option<CanvasRenderer>,
    /// Set once the exit command arrives; everything is ignored afterwards
    exited: bool,
}

impl Default for ChaikinAnimator {
    fn default() -> Self {
        Self::new()
    }
}

#[wasm_bindgen]
impl ChaikinAnimator {
    /// Create an engine with the default configuration
    #[wasm_bindgen(constructor)]
    pub fn new() -> ChaikinAnimator {
        Self::with_config(AnimatorConfig::default())
    }

    /// Create an engine configured from a YAML string
    #[wasm_bindgen]
    pub fn from_yaml(yaml: &str) -> Result<ChaikinAnimator, JsValue> {
        let config = AnimatorConfig::from_yaml(yaml).map_err(|e| JsValue::from_str(&e.to_string()))?;
        Ok(Self::with_config(config))
    }

    /// Replace the configuration. Takes effect from the next start;
    /// an invalid config leaves the current one in place.
    #[wasm_bindgen]
    pub fn load_config(&mut self, yaml: &str) -> Result<(), JsValue> {
        let config = AnimatorConfig::from_yaml(yaml).map_err(|e| JsValue::from_str(&e.to_string()))?;
        self.apply_config(config);
        Ok(())
    }

    /// Draw into `canvas` on every `render` call
    #[wasm_bindgen]
    pub fn attach_canvas(&mut self, canvas: HtmlCanvasElement) -> Result<(), JsValue> {
        let renderer = CanvasRenderer::new(&canvas, self.config.style.clone())
            .map_err(|e| JsValue::from_str(&e))?;
        self.renderer = Some(renderer);
        Ok(())
    }

    /// Resize the attached canvas' drawing area
    #[wasm_bindgen]
    pub fn resize(&mut self, width: u32, height: u32) {
        if let Some(renderer) = &mut self.renderer {
            renderer.resize(width, height);
        }
    }

    /// Pointer click in canvas coordinates. Returns whether a redraw is needed.
    #[wasm_bindgen]
    pub fn on_click(&mut self, x: f64, y: f64) -> bool {
        self.dispatch(Input::Click(Vec2::new(x, y)))
    }

    /// Convenience wrapper reading the click position from a DOM event
    #[wasm_bindgen]
    pub fn on_mouse_event(&mut self, event: &MouseEvent) -> bool {
        self.on_click(event.offset_x() as f64, event.offset_y() as f64)
    }

    /// Key press by `KeyboardEvent.key` name. Returns whether a redraw is needed.
    #[wasm_bindgen]
    pub fn on_key(&mut self, key: &str) -> bool {
        match Command::from_key(key) {
            Some(Command::Start) => self.start(),
            Some(Command::Exit) => self.exit(),
            Some(Command::Reset) => self.reset(),
            Some(Command::Clear) => self.clear(),
            None => false,
        }
    }

    #[wasm_bindgen]
    pub fn on_keyboard_event(&mut self, event: &KeyboardEvent) -> bool {
        self.on_key(&event.key())
    }

    /// Refine the control polygon and start animating (needs 3+ points)
    #[wasm_bindgen]
    pub fn start(&mut self) -> bool {
        self.dispatch(Input::Start)
    }

    /// Stop animating and go back to editing
    #[wasm_bindgen]
    pub fn reset(&mut self) -> bool {
        self.dispatch(Input::Reset)
    }

    /// Remove all control points (editing only)
    #[wasm_bindgen]
    pub fn clear(&mut self) -> bool {
        self.dispatch(Input::Clear)
    }

    /// Advance the animation by exactly one step
    #[wasm_bindgen]
    pub fn tick(&mut self) -> bool {
        self.dispatch(Input::Tick)
    }

    /// Halt the engine. Nothing is drawn or accepted afterwards.
    #[wasm_bindgen]
    pub fn exit(&mut self) -> bool {
        if self.exited {
            return false;
        }
        log::info!("exit requested");
        self.interaction.handle(Input::Reset);
        self.exited = true;
        false
    }

    /// Feed elapsed frame time in seconds. Returns whether a redraw is needed.
    #[wasm_bindgen]
    pub fn update(&mut self, dt: f32) -> bool {
        if self.exited {
            return false;
        }
        self.interaction.update(dt)
    }

    /// Draw the current frame on the attached canvas
    #[wasm_bindgen]
    pub fn render(&self) -> Result<(), JsValue> {
        if self.exited {
            return Ok(());
        }
        let Some(renderer) = &self.renderer else {
            return Ok(());
        };
        renderer
            .draw(&self.interaction.drawable(), self.interaction.mode())
            .map_err(|e| JsValue::from_str(&e))
    }

    /// Control points as `[x0, y0, x1, y1, ...]`
    #[wasm_bindgen]
    pub fn marker_coords(&self) -> Vec<f64> {
        if self.exited {
            return Vec::new();
        }
        math::flatten(self.interaction.drawable().markers)
    }

    /// Polyline to stroke as `[x0, y0, x1, y1, ...]`
    #[wasm_bindgen]
    pub fn segment_coords(&self) -> Vec<f64> {
        if self.exited {
            return Vec::new();
        }
        math::flatten(self.interaction.drawable().segments)
    }

    #[wasm_bindgen]
    pub fn is_animating(&self) -> bool {
        self.interaction.mode() == Mode::Animating
    }

    #[wasm_bindgen]
    pub fn has_exited(&self) -> bool {
        self.exited
    }

    #[wasm_bindgen]
    pub fn point_count(&self) -> usize {
        self.interaction.polygon().len()
    }

    /// Index of the refinement level on screen
    #[wasm_bindgen]
    pub fn current_step(&self) -> usize {
        self.interaction.sequencer().cursor()
    }

    /// Levels in the running animation, or the configured count while editing
    #[wasm_bindgen]
    pub fn level_count(&self) -> usize {
        match self.interaction.mode() {
            Mode::Animating => self.interaction.sequencer().level_count(),
            Mode::Editing => self.config.level_count,
        }
    }
}

impl ChaikinAnimator {
    pub fn with_config(config: AnimatorConfig) -> Self {
        Self {
            interaction: Interaction::new(&config),
            config,
            renderer: None,
            exited: false,
        }
    }

    pub fn config(&self) -> &AnimatorConfig {
        &self.config
    }

    pub fn interaction(&self) -> &Interaction {
        &self.interaction
    }

    fn apply_config(&mut self, config: AnimatorConfig) {
        self.interaction.reconfigure(&config);
        if let Some(renderer) = &mut self.renderer {
            renderer.set_style(config.style.clone());
        }
        self.config = config;
    }

    fn dispatch(&mut self, input: Input) -> bool {
        if self.exited {
            return false;
        }
        self.interaction.handle(input).needs_redraw()
    }
}
