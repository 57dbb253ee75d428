use serde::{Deserialize, Serialize};

/// An axis-aligned rectangle described by its size.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Rectangle {
    /// Width of the rectangle.
    pub width: f32,
    /// Height of the rectangle.
    pub height: f32,
}

impl Rectangle {
    /// Create a rectangle from its width and height.
    #[must_use]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// `width * height`
    #[must_use]
    pub const fn area(self) -> f32 {
        self.width * self.height
    }
}
