/// Output canvas dimensions in pixels.
///
/// Every sampled layer is resized to the canvas before compositing, and every
/// generated portrait has exactly these dimensions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Canvas {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl Default for Canvas {
    /// The stock portrait canvas: 250x350.
    fn default() -> Self {
        Self {
            width: 250,
            height: 350,
        }
    }
}

impl Canvas {
    /// Byte length of one RGBA8 buffer covering the canvas.
    pub fn rgba8_len(self) -> usize {
        (self.width as usize) * (self.height as usize) * 4
    }

    /// Byte length of one RGB8 buffer covering the canvas.
    pub fn rgb8_len(self) -> usize {
        (self.width as usize) * (self.height as usize) * 3
    }
}
