// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Decode book covers into fixed-size egui images, falling back to a gray tile.

use std::path::Path;

use eframe::egui;
use image::imageops::FilterType;
use image::{Rgba, RgbaImage};

/// Edge length of a rendered cover, in pixels.
pub const COVER_SIZE: u32 = 50;

const PLACEHOLDER_GRAY: Rgba<u8> = Rgba([128, 128, 128, 255]);

/// Decoded cover ready to be uploaded as a texture.
pub struct Cover {
    pub image: egui::ColorImage,
    /// True when the image is the gray fallback rather than the book's file.
    pub placeholder: bool,
}

/// Load the cover at `path`, resized to exactly [`COVER_SIZE`] square.
///
/// A missing path, missing file, or undecodable file yields the gray placeholder.
pub fn load_cover(path: Option<&Path>) -> Cover {
    let Some(path) = path else {
        log::debug!("Book has no cover path; using placeholder");
        return placeholder();
    };

    match image::open(path) {
        Ok(img) => {
            let resized = img
                .resize_exact(COVER_SIZE, COVER_SIZE, FilterType::Lanczos3)
                .to_rgba8();
            Cover {
                image: to_color_image(&resized),
                placeholder: false,
            }
        }
        Err(err) => {
            log::warn!("Cover {} unavailable ({err}); using placeholder", path.display());
            placeholder()
        }
    }
}

fn placeholder() -> Cover {
    let tile = RgbaImage::from_pixel(COVER_SIZE, COVER_SIZE, PLACEHOLDER_GRAY);
    Cover {
        image: to_color_image(&tile),
        placeholder: true,
    }
}

fn to_color_image(img: &RgbaImage) -> egui::ColorImage {
    let size = [img.width() as usize, img.height() as usize];
    egui::ColorImage::from_rgba_unmultiplied(size, img.as_raw())
}
