use crate::math::RGBColor;

use anyhow::Context;
use image::RgbImage;

use std::path::Path;

#[derive(Clone, Debug)]
pub struct Film<T> {
    pub buffer: Vec<T>,
    pub width: usize,
    pub height: usize,
}

impl<T: Copy> Film<T> {
    pub fn new(width: usize, height: usize, fill_value: T) -> Film<T> {
        Film {
            buffer: vec![fill_value; width * height],
            width,
            height,
        }
    }
    pub fn at(&self, x: usize, y: usize) -> T {
        self.buffer[y * self.width + x]
    }
}

impl<T> Film<T> {
    pub fn write_at(&mut self, x: usize, y: usize, value: T) {
        self.buffer[y * self.width + x] = value
    }

    pub fn total_pixels(&self) -> usize {
        self.width * self.height
    }
}

impl Film<RGBColor> {
    pub fn to_rgb8(&self) -> Vec<u8> {
        self.buffer.iter().flat_map(|c| c.to_rgb8()).collect()
    }

    pub fn write_png(&self, filepath: &Path) -> anyhow::Result<()> {
        if let Some(parent) = filepath.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("failed to create {}", parent.display()))?;
        }
        let image = RgbImage::from_raw(self.width as u32, self.height as u32, self.to_rgb8())
            .context("film buffer does not match its dimensions")?;
        image
            .save(filepath)
            .with_context(|| format!("failed to write {}", filepath.display()))?;
        Ok(())
    }
}
