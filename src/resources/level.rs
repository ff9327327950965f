//! Level geometry.
//!
//! [`LevelLayout`] describes the mission wall: world size, ground slab,
//! actor spawn point, the evenly spaced doors, and where the boundary wall
//! goes once every door is passed. It can be loaded from JSON; any field
//! left out keeps its default.
//!
//! ```json
//! { "world_width": 1600, "door_spacing": 300, "wall_offset": 250 }
//! ```

use bevy_ecs::prelude::Resource;
use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Upper bound on doors per level; zone ids are dense from 1.
pub const MAX_DOORS: usize = 256;

#[derive(Resource, Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct LevelLayout {
    pub world_width: f32,
    pub world_height: f32,
    /// Thickness of the ground slab along the bottom edge.
    pub ground_height: f32,
    pub spawn_x: f32,
    /// Spawn height measured up from the bottom of the world.
    pub spawn_above_bottom: f32,
    /// Center x of the first door.
    pub first_door_x: f32,
    pub door_spacing: f32,
    /// Door center measured up from the bottom of the world.
    pub door_above_bottom: f32,
    pub zone_width: f32,
    pub zone_height: f32,
    /// Distance from the last door's center to the boundary wall's center.
    pub wall_offset: f32,
    pub wall_width: f32,
}

impl Default for LevelLayout {
    fn default() -> Self {
        Self {
            world_width: 1600.0,
            world_height: 400.0,
            ground_height: 50.0,
            spawn_x: 100.0,
            spawn_above_bottom: 100.0,
            first_door_x: 250.0,
            door_spacing: 600.0,
            door_above_bottom: 100.0,
            zone_width: 60.0,
            zone_height: 120.0,
            wall_offset: 400.0,
            wall_width: 20.0,
        }
    }
}

impl LevelLayout {
    pub fn from_json(text: &str) -> Result<Self, String> {
        let layout: LevelLayout =
            serde_json::from_str(text).map_err(|e| format!("Failed to parse level JSON: {}", e))?;
        layout.validate()?;
        Ok(layout)
    }

    pub fn load_from_file(path: &str) -> Result<Self, String> {
        let text = std::fs::read_to_string(path)
            .map_err(|e| format!("Failed to read level file {}: {}", path, e))?;
        Self::from_json(&text)
    }

    pub fn validate(&self) -> Result<(), String> {
        let fields = [
            self.world_width,
            self.world_height,
            self.ground_height,
            self.spawn_x,
            self.spawn_above_bottom,
            self.first_door_x,
            self.door_spacing,
            self.door_above_bottom,
            self.zone_width,
            self.zone_height,
            self.wall_offset,
            self.wall_width,
        ];
        if fields.iter().any(|v| !v.is_finite()) {
            return Err("layout values must be finite".to_string());
        }
        if self.world_width <= 0.0 || self.world_height <= 0.0 {
            return Err("world size must be positive".to_string());
        }
        // zone ids must grow with x
        if self.door_spacing <= 0.0 || self.first_door_x + self.door_spacing <= self.first_door_x {
            return Err(format!(
                "door_spacing {} is too small to separate doors",
                self.door_spacing
            ));
        }
        let span = (self.world_width - self.first_door_x).max(0.0);
        if span / self.door_spacing > MAX_DOORS as f32 {
            return Err(format!(
                "door_spacing {} gives more than {} doors",
                self.door_spacing, MAX_DOORS
            ));
        }
        if self.zone_width <= 0.0 || self.zone_height <= 0.0 {
            return Err("zone size must be positive".to_string());
        }
        if self.wall_width <= 0.0 {
            return Err("wall_width must be positive".to_string());
        }
        Ok(())
    }

    /// Center of every door, in id order (id = index + 1).
    pub fn door_centers(&self) -> Vec<Vec2> {
        let y = self.world_height - self.door_above_bottom;
        (0..=MAX_DOORS)
            .map(|i| self.first_door_x + self.door_spacing * i as f32)
            .take_while(|x| *x < self.world_width)
            .take(MAX_DOORS)
            .map(|x| Vec2::new(x, y))
            .collect()
    }

    pub fn spawn_point(&self) -> Vec2 {
        Vec2::new(self.spawn_x, self.world_height - self.spawn_above_bottom)
    }

    /// Center and size of the ground slab spanning `from_x..to_x`.
    pub fn ground_slab(&self, from_x: f32, to_x: f32) -> (Vec2, Vec2) {
        let center = Vec2::new(
            (from_x + to_x) * 0.5,
            self.world_height - self.ground_height * 0.5,
        );
        (center, Vec2::new(to_x - from_x, self.ground_height))
    }

    /// Center and size of the boundary wall placed past the door at `last_door_x`.
    pub fn boundary_wall(&self, last_door_x: f32) -> (Vec2, Vec2) {
        (
            Vec2::new(last_door_x + self.wall_offset, self.world_height * 0.5),
            Vec2::new(self.wall_width, self.world_height),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_layout_has_three_doors() {
        let l = LevelLayout::default();
        let xs: Vec<f32> = l.door_centers().iter().map(|c| c.x).collect();
        assert_eq!(xs, vec![250.0, 850.0, 1450.0]);
        assert_eq!(l.door_centers()[0].y, 300.0);
        assert_eq!(l.spawn_point(), Vec2::new(100.0, 300.0));
    }

    #[test]
    fn json_overrides_and_defaults_mix() {
        let l = LevelLayout::from_json(r#"{ "door_spacing": 300 }"#).unwrap();
        assert_eq!(l.door_centers().len(), 5);
        assert_eq!(l.world_width, 1600.0);
    }

    #[test]
    fn bad_spacing_rejected() {
        assert!(LevelLayout::from_json(r#"{ "door_spacing": 0 }"#).is_err());
        assert!(LevelLayout::from_json(r#"{ "door_spacing": 0.000001 }"#).is_err());
        assert!(LevelLayout::from_json(r#"{ "door_spacing": 1 }"#).is_err());
        assert!(LevelLayout::from_json("not json").is_err());
    }

    #[test]
    fn densest_accepted_layout_is_capped() {
        let l = LevelLayout {
            first_door_x: 0.0,
            world_width: 2560.0,
            door_spacing: 10.0,
            ..LevelLayout::default()
        };
        assert!(l.validate().is_ok());
        assert_eq!(l.door_centers().len(), MAX_DOORS);
    }

    #[test]
    fn first_door_past_the_world_gives_no_doors() {
        let l = LevelLayout {
            first_door_x: 2000.0,
            ..LevelLayout::default()
        };
        assert!(l.validate().is_ok());
        assert!(l.door_centers().is_empty());
    }

    #[test]
    fn wall_sits_past_last_door() {
        let l = LevelLayout::default();
        let (center, size) = l.boundary_wall(1450.0);
        assert_eq!(center, Vec2::new(1850.0, 200.0));
        assert_eq!(size, Vec2::new(20.0, 400.0));
    }

    #[test]
    fn ground_slab_sits_on_the_bottom() {
        let l = LevelLayout::default();
        let (center, size) = l.ground_slab(0.0, 1600.0);
        assert_eq!(center, Vec2::new(800.0, 375.0));
        assert_eq!(size, Vec2::new(1600.0, 50.0));
    }
}
