use std::collections::HashMap;

use egui::{ColorImage, Context, TextureHandle, TextureId, TextureOptions};
use image::RgbaImage;
use thiserror::Error;

/// Errors that can occur during texture generation
#[derive(Error, Debug)]
pub enum TextureGenerationError {
    #[error("Nothing to draw into the texture")]
    NoSource,
    #[error("Invalid texture dimensions {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },
}

/// The layers the canvas draws from textures
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextureSlot {
    Background,
    Mask,
}

impl TextureSlot {
    fn name(&self) -> &'static str {
        match self {
            TextureSlot::Background => "background",
            TextureSlot::Mask => "mask",
        }
    }
}

/// Convert an RGBA buffer into an egui image
pub fn color_image_from_rgba(image: &RgbaImage) -> Result<ColorImage, TextureGenerationError> {
    let (width, height) = image.dimensions();
    if width == 0 || height == 0 {
        return Err(TextureGenerationError::InvalidDimensions { width, height });
    }
    Ok(ColorImage::from_rgba_unmultiplied(
        [width as usize, height as usize],
        image.as_raw(),
    ))
}

/// Caches canvas textures by (slot, version) and evicts the least recently used
pub struct TextureManager {
    texture_cache: HashMap<(TextureSlot, u64), TextureHandle>,
    last_used: HashMap<(TextureSlot, u64), u64>,
    current_frame: u64,
    max_cache_size: usize,
}

impl TextureManager {
    pub fn new(max_cache_size: usize) -> Self {
        Self {
            texture_cache: HashMap::new(),
            last_used: HashMap::new(),
            current_frame: 0,
            max_cache_size,
        }
    }

    /// Should be called at the start of each frame
    pub fn begin_frame(&mut self) {
        self.current_frame += 1;
    }

    /// Return the cached texture for `slot` at `version`, generating it on a miss.
    ///
    /// A miss also drops older versions of the same slot; they are never shown again.
    pub fn get_or_create_texture<F>(
        &mut self,
        slot: TextureSlot,
        version: u64,
        generator: F,
        ctx: &Context,
    ) -> Result<TextureId, TextureGenerationError>
    where
        F: FnOnce() -> Result<ColorImage, TextureGenerationError>,
    {
        let cache_key = (slot, version);

        if let Some(handle) = self.texture_cache.get(&cache_key) {
            self.last_used.insert(cache_key, self.current_frame);
            return Ok(handle.id());
        }

        let image = generator()?;
        self.invalidate_slot(slot);

        let name = format!("{}_v{}", slot.name(), version);
        let handle = ctx.load_texture(name, image, TextureOptions::LINEAR);

        self.texture_cache.insert(cache_key, handle.clone());
        self.last_used.insert(cache_key, self.current_frame);
        self.prune_cache_if_needed();

        Ok(handle.id())
    }

    /// Drop every cached version of a slot
    pub fn invalidate_slot(&mut self, slot: TextureSlot) {
        self.texture_cache.retain(|(s, _), _| *s != slot);
        self.last_used.retain(|(s, _), _| *s != slot);
    }

    fn prune_cache_if_needed(&mut self) {
        if self.texture_cache.len() <= self.max_cache_size {
            return;
        }

        let mut entries: Vec<((TextureSlot, u64), u64)> =
            self.last_used.iter().map(|(k, v)| (*k, *v)).collect();
        entries.sort_by_key(|(_, frame)| *frame);

        let to_remove = entries.len() - self.max_cache_size;
        for (key, _) in entries.iter().take(to_remove) {
            self.texture_cache.remove(key);
            self.last_used.remove(key);
        }
    }

    pub fn clear_cache(&mut self) {
        self.texture_cache.clear();
        self.last_used.clear();
    }

    pub fn cache_size(&self) -> usize {
        self.texture_cache.len()
    }

    #[cfg(test)]
    fn get_texture(&self, slot: TextureSlot, version: u64) -> Option<&TextureHandle> {
        self.texture_cache.get(&(slot, version))
    }
}
