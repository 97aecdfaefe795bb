//! 8-bit RGBA image the scheduler renders into.

use crate::{ColumnStrip, RenderResult};
use log::info;
use std::path::Path;

/// Row-major grid of RGBA8 pixels.
#[derive(Debug, Clone, PartialEq)]
pub struct Framebuffer {
    width: u32,
    height: u32,
    pixels: Vec<[u8; 4]>,
}

impl Framebuffer {
    /// Create a framebuffer with every pixel transparent black.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![[0; 4]; width as usize * height as usize],
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    #[inline]
    fn index(&self, x: u32, y: u32) -> usize {
        y as usize * self.width as usize + x as usize
    }

    /// Get the pixel at (x, y).
    pub fn get_pixel(&self, x: u32, y: u32) -> [u8; 4] {
        self.pixels[self.index(x, y)]
    }

    /// Set the pixel at (x, y).
    pub fn set_pixel(&mut self, x: u32, y: u32, rgba: [u8; 4]) {
        let index = self.index(x, y);
        self.pixels[index] = rgba;
    }

    /// Copy one worker's column-major strip into place.
    pub fn write_strip(&mut self, strip: &ColumnStrip) {
        if self.height == 0 {
            return;
        }
        let columns = strip.range.start..strip.range.end;
        for (column, pixels) in columns.zip(strip.pixels.chunks(self.height as usize)) {
            for (y, rgba) in pixels.iter().enumerate() {
                self.set_pixel(column, y as u32, *rgba);
            }
        }
    }

    /// All pixels, for checks and iteration.
    pub fn pixels(&self) -> &[[u8; 4]] {
        &self.pixels
    }

    /// Raw RGBA bytes in row-major order.
    pub fn as_bytes(&self) -> Vec<u8> {
        self.pixels.iter().flatten().copied().collect()
    }

    /// Encode as PNG.
    pub fn save_png<P: AsRef<Path>>(&self, path: P) -> RenderResult<()> {
        let path = path.as_ref();
        image::save_buffer_with_format(
            path,
            &self.as_bytes(),
            self.width,
            self.height,
            image::ColorType::Rgba8,
            image::ImageFormat::Png,
        )?;
        info!("Wrote {}x{} image to {}", self.width, self.height, path.display());
        Ok(())
    }
}
