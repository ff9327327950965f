use bevy_ecs::prelude::Component;

#[derive(Component, Clone, Debug)]
/// Text drawn by the substrate on top of the world.
pub struct DynamicText {
    /// The text content to render.
    pub content: String,
    /// Font size in pixels.
    pub font_size: f32,
    /// Draw the text centered on its position instead of from the top-left.
    pub centered: bool,
}

impl DynamicText {
    pub fn new(content: impl Into<String>, font_size: f32) -> Self {
        Self {
            content: content.into(),
            font_size,
            centered: false,
        }
    }

    pub fn centered(mut self) -> Self {
        self.centered = true;
        self
    }
}
