// src/preview.rs

use std::path::Path;

use colorgrad::{Color, CustomGradient, Gradient};
use image::{Rgb, RgbImage};
use log::info;
use worldbuilder::World;

/// Colours a top-down view of a world by the height of each column.
pub struct Preview {
    gradient: Gradient,
}

impl Preview {
    pub fn new() -> Result<Self, String> {
        let gradient = CustomGradient::new()
            .colors(&[
                Color::new(0.0, 0.0, 0.5, 1.0), // Lowest
                Color::new(0.0, 0.0, 1.0, 1.0),
                Color::new(0.0, 0.6, 0.0, 1.0),
                Color::new(0.5, 0.3, 0.0, 1.0),
                Color::new(1.0, 1.0, 1.0, 1.0), // Highest
            ])
            .domain(&[0.0, 0.25, 0.5, 0.75, 1.0])
            .build()
            .map_err(|e| format!("cannot build preview gradient: {e:?}"))?;

        Ok(Self { gradient })
    }

    /// One `scale` x `scale` square per column, x to the right and z down.
    /// Empty columns stay black. Returns `None` for an empty world.
    pub fn render(&self, world: &World, scale: u32) -> Result<Option<RgbImage>, String> {
        let Some(bounds) = world.bounds() else {
            return Ok(None);
        };
        let [width, height, depth] = bounds.size.dims();

        let mut tops = vec![None; width * depth];
        for (position, _) in world.iter() {
            let [x, y, z] = (position - bounds.start).dims();
            let top = &mut tops[z * width + x];
            *top = Some(top.map_or(y, |t: usize| t.max(y)));
        }

        let span = height.saturating_sub(1).max(1) as f64;
        let scale = scale.max(1);
        let pixels = |blocks: usize| {
            u32::try_from(blocks)
                .ok()
                .and_then(|b| b.checked_mul(scale))
                .ok_or_else(|| format!("preview of {width}x{depth} columns at scale {scale} is too large"))
        };
        let mut img = RgbImage::new(pixels(width)?, pixels(depth)?);
        for z in 0..depth {
            for x in 0..width {
                let Some(y) = tops[z * width + x] else {
                    continue;
                };
                let c = self.gradient.at(y as f64 / span);
                let color = Rgb([(c.r * 255.0) as u8, (c.g * 255.0) as u8, (c.b * 255.0) as u8]);
                for dz in 0..scale {
                    for dx in 0..scale {
                        img.put_pixel(x as u32 * scale + dx, z as u32 * scale + dz, color);
                    }
                }
            }
        }
        Ok(Some(img))
    }

    pub fn save(&self, world: &World, scale: u32, path: &Path) -> Result<(), Box<dyn std::error::Error>> {
        match self.render(world, scale)? {
            Some(img) => {
                img.save(path)?;
                info!("preview written to {}", path.display());
            }
            None => info!("nothing built, no preview written"),
        }
        Ok(())
    }
}
