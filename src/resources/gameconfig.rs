//! Game configuration resource.
//!
//! Tunables loaded from an INI file. Every key is optional; anything missing
//! keeps its default.
//!
//! # Configuration File Format
//!
//! ```ini
//! [window]
//! width = 800
//! height = 400
//! target_fps = 60
//!
//! [actor]
//! speed = 200
//! gravity = 300
//! scale = 4
//! walk_period_ms = 150
//!
//! [timing]
//! ready_delay_ms = 100
//! message_ms = 2000
//!
//! [touch]
//! edge_fraction = 0.2
//!
//! [text]
//! door_message = You tapped the door!
//! instructions = Touch edges to move, tap door to enter
//! ```

use bevy_ecs::prelude::*;
use configparser::ini::Ini;
use log::info;
use std::path::PathBuf;

const DEFAULT_WINDOW_WIDTH: u32 = 800;
const DEFAULT_WINDOW_HEIGHT: u32 = 400;
const DEFAULT_TARGET_FPS: u32 = 60;
const DEFAULT_SPEED: f32 = 200.0;
const DEFAULT_GRAVITY: f32 = 300.0;
const DEFAULT_ACTOR_SCALE: f32 = 4.0;
const DEFAULT_WALK_PERIOD_MS: u64 = 150;
const DEFAULT_READY_DELAY_MS: u64 = 100;
const DEFAULT_MESSAGE_MS: u64 = 2000;
const DEFAULT_EDGE_FRACTION: f32 = 0.2;
const DEFAULT_DOOR_MESSAGE: &str = "You tapped the door!";
const DEFAULT_INSTRUCTIONS: &str = "Touch edges to move, tap door to enter";
const DEFAULT_CONFIG_PATH: &str = "./config.ini";

/// Actor sprite size in source pixels before scaling.
pub const ACTOR_PIXELS_W: f32 = 13.0;
pub const ACTOR_PIXELS_H: f32 = 16.0;

#[derive(Resource, Debug, Clone, PartialEq)]
pub struct GameConfig {
    /// Window width in pixels.
    pub window_width: u32,
    /// Window height in pixels.
    pub window_height: u32,
    pub target_fps: u32,
    /// Walking speed in px/s.
    pub speed: f32,
    /// Downward acceleration in px/s².
    pub gravity: f32,
    /// Scale applied to the 13×16 actor sprite.
    pub actor_scale: f32,
    /// Half-period of the walk cycle.
    pub walk_period_ms: u64,
    /// Delay between scene start and actor spawn.
    pub ready_delay_ms: u64,
    /// How long the door message stays up.
    pub message_ms: u64,
    /// Width of each touch edge band as a fraction of the screen.
    pub edge_fraction: f32,
    pub door_message: String,
    pub instructions: String,
    /// Path to the configuration file.
    pub config_path: PathBuf,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl GameConfig {
    pub fn new() -> Self {
        Self {
            window_width: DEFAULT_WINDOW_WIDTH,
            window_height: DEFAULT_WINDOW_HEIGHT,
            target_fps: DEFAULT_TARGET_FPS,
            speed: DEFAULT_SPEED,
            gravity: DEFAULT_GRAVITY,
            actor_scale: DEFAULT_ACTOR_SCALE,
            walk_period_ms: DEFAULT_WALK_PERIOD_MS,
            ready_delay_ms: DEFAULT_READY_DELAY_MS,
            message_ms: DEFAULT_MESSAGE_MS,
            edge_fraction: DEFAULT_EDGE_FRACTION,
            door_message: DEFAULT_DOOR_MESSAGE.to_string(),
            instructions: DEFAULT_INSTRUCTIONS.to_string(),
            config_path: PathBuf::from(DEFAULT_CONFIG_PATH),
        }
    }

    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            config_path: path.into(),
            ..Self::new()
        }
    }

    /// Actor collider/sprite size in world pixels.
    pub fn actor_size(&self) -> (f32, f32) {
        (
            ACTOR_PIXELS_W * self.actor_scale,
            ACTOR_PIXELS_H * self.actor_scale,
        )
    }

    pub fn ready_delay_secs(&self) -> f32 {
        self.ready_delay_ms as f32 / 1000.0
    }

    pub fn message_secs(&self) -> f32 {
        self.message_ms as f32 / 1000.0
    }

    /// Load configuration from the INI file at `config_path`.
    ///
    /// Missing values retain their current values.
    pub fn load_from_file(&mut self) -> Result<(), String> {
        let mut config = Ini::new();
        config
            .load(&self.config_path)
            .map_err(|e| format!("Failed to load config file: {}", e))?;
        self.apply(&config);
        info!(
            "Loaded config from {:?}: speed={}, gravity={}, walk_period={}ms, message={}ms",
            self.config_path, self.speed, self.gravity, self.walk_period_ms, self.message_ms
        );
        Ok(())
    }

    /// Load configuration from INI text.
    pub fn load_from_str(&mut self, text: &str) -> Result<(), String> {
        let mut config = Ini::new();
        config
            .read(text.to_string())
            .map_err(|e| format!("Failed to parse config: {}", e))?;
        self.apply(&config);
        Ok(())
    }

    fn apply(&mut self, config: &Ini) {
        // [window] section
        if let Some(width) = config.getuint("window", "width").ok().flatten() {
            self.window_width = width as u32;
        }
        if let Some(height) = config.getuint("window", "height").ok().flatten() {
            self.window_height = height as u32;
        }
        if let Some(fps) = config.getuint("window", "target_fps").ok().flatten() {
            self.target_fps = fps as u32;
        }

        // [actor] section
        if let Some(speed) = config.getfloat("actor", "speed").ok().flatten() {
            self.speed = speed as f32;
        }
        if let Some(gravity) = config.getfloat("actor", "gravity").ok().flatten() {
            self.gravity = gravity as f32;
        }
        if let Some(scale) = config.getfloat("actor", "scale").ok().flatten() {
            self.actor_scale = scale as f32;
        }
        if let Some(period) = config.getuint("actor", "walk_period_ms").ok().flatten() {
            // walk cycle period must be non-zero
            self.walk_period_ms = period.max(1);
        }

        // [timing] section
        if let Some(delay) = config.getuint("timing", "ready_delay_ms").ok().flatten() {
            self.ready_delay_ms = delay;
        }
        if let Some(ms) = config.getuint("timing", "message_ms").ok().flatten() {
            self.message_ms = ms;
        }

        // [touch] section
        if let Some(edge) = config.getfloat("touch", "edge_fraction").ok().flatten() {
            self.edge_fraction = (edge as f32).clamp(0.0, 0.5);
        }

        // [text] section
        if let Some(msg) = config.get("text", "door_message") {
            self.door_message = msg;
        }
        if let Some(text) = config.get("text", "instructions") {
            self.instructions = text;
        }
    }

    /// Save configuration to the INI file.
    pub fn save_to_file(&self) -> Result<(), String> {
        let mut config = Ini::new();

        config.set("window", "width", Some(self.window_width.to_string()));
        config.set("window", "height", Some(self.window_height.to_string()));
        config.set("window", "target_fps", Some(self.target_fps.to_string()));

        config.set("actor", "speed", Some(self.speed.to_string()));
        config.set("actor", "gravity", Some(self.gravity.to_string()));
        config.set("actor", "scale", Some(self.actor_scale.to_string()));
        config.set(
            "actor",
            "walk_period_ms",
            Some(self.walk_period_ms.to_string()),
        );

        config.set(
            "timing",
            "ready_delay_ms",
            Some(self.ready_delay_ms.to_string()),
        );
        config.set("timing", "message_ms", Some(self.message_ms.to_string()));

        config.set(
            "touch",
            "edge_fraction",
            Some(self.edge_fraction.to_string()),
        );

        config.set("text", "door_message", Some(self.door_message.clone()));
        config.set("text", "instructions", Some(self.instructions.clone()));

        config
            .write(&self.config_path)
            .map_err(|e| format!("Failed to save config file: {}", e))?;

        info!("Saved config to {:?}", self.config_path);

        Ok(())
    }

    /// Get the window size.
    pub fn window_size(&self) -> (u32, u32) {
        (self.window_width, self.window_height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_the_stock_tunables() {
        let c = GameConfig::new();
        assert_eq!(c.speed, 200.0);
        assert_eq!(c.gravity, 300.0);
        assert_eq!(c.walk_period_ms, 150);
        assert_eq!(c.ready_delay_ms, 100);
        assert_eq!(c.message_ms, 2000);
        assert_eq!(c.door_message, "You tapped the door!");
        assert_eq!(c.actor_size(), (52.0, 64.0));
    }

    #[test]
    fn partial_ini_overrides_only_given_keys() {
        let mut c = GameConfig::new();
        c.load_from_str("[actor]\nspeed = 120\n\n[timing]\nmessage_ms = 500\n")
            .unwrap();
        assert_eq!(c.speed, 120.0);
        assert_eq!(c.message_ms, 500);
        assert_eq!(c.gravity, 300.0);
        assert_eq!(c.message_secs(), 0.5);
    }

    #[test]
    fn zero_walk_period_is_bumped() {
        let mut c = GameConfig::new();
        c.load_from_str("[actor]\nwalk_period_ms = 0\n").unwrap();
        assert_eq!(c.walk_period_ms, 1);
    }

    #[test]
    fn missing_file_is_an_error() {
        let mut c = GameConfig::with_path("/nonexistent/missionwalk/config.ini");
        assert!(c.load_from_file().is_err());
        assert_eq!(c.speed, 200.0);
    }
}
