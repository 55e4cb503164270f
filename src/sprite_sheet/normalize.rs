use image::{
    imageops::{self, FilterType},
    DynamicImage, RgbaImage,
};
use tracy_full::zone;

/// Dimensions that fit `(width, height)` inside a `target_size` square
/// without changing aspect ratio. Never scales up.
pub fn fitted_dimensions(width: u32, height: u32, target_size: u32) -> (u32, u32) {
    if width <= target_size && height <= target_size {
        return (width, height);
    }
    let scale_side = |side: u32, longest: u32| -> u32 {
        let scaled = (side as u64 * target_size as u64 + longest as u64 / 2) / longest as u64;
        (scaled as u32).clamp(1, target_size)
    };
    if width >= height {
        (target_size, scale_side(height, width))
    } else {
        (scale_side(width, height), target_size)
    }
}

/// Shrinks `image` to fit a `target_size` square and centers it on a fully
/// transparent canvas of exactly that size. Images without an alpha channel
/// come out fully opaque.
pub fn normalize(image: &DynamicImage, target_size: u32) -> RgbaImage {
    zone!("normalize");
    let rgba = image.to_rgba8();
    let (width, height) = fitted_dimensions(rgba.width(), rgba.height(), target_size);
    let scaled = if (width, height) == rgba.dimensions() {
        rgba
    } else {
        zone!("resize");
        imageops::resize(&rgba, width, height, FilterType::Lanczos3)
    };

    let mut tile = RgbaImage::new(target_size, target_size);
    let x_offset = (target_size - width) / 2;
    let y_offset = (target_size - height) / 2;
    imageops::overlay(&mut tile, &scaled, x_offset as i64, y_offset as i64);
    tile
}
