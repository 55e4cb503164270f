#![allow(dead_code)]

use image::{Rgb, RgbImage, Rgba, RgbaImage};
use sprite_pack::sprite_sheet::PackerConfig;
use std::{
    fs,
    path::{Path, PathBuf},
};

pub const RED: [u8; 4] = [255, 0, 0, 255];
pub const GREEN: [u8; 4] = [0, 255, 0, 255];
pub const BLUE: [u8; 4] = [0, 0, 255, 255];

/// A scratch directory under the system temp dir, removed on drop.
pub struct TempDir(PathBuf);

impl TempDir {
    pub fn new(name: &str) -> TempDir {
        let path = std::env::temp_dir().join(format!(
            "sprite-pack-{}-{}",
            name,
            std::process::id()
        ));
        let _ = fs::remove_dir_all(&path);
        fs::create_dir_all(&path).unwrap();
        TempDir(path)
    }

    pub fn path(&self) -> &Path {
        &self.0
    }

    pub fn logos(&self) -> PathBuf {
        self.0.join("logos")
    }

    /// Config with default constants that reads `<tmp>/logos` and writes into `<tmp>/out`.
    pub fn config(&self) -> PackerConfig {
        fs::create_dir_all(self.logos()).unwrap();
        PackerConfig::with_paths(
            self.logos(),
            self.0.join("out").join("sheet.png"),
            self.0.join("out").join("positions.ts"),
        )
    }
}

impl Drop for TempDir {
    fn drop(&mut self) {
        let _ = fs::remove_dir_all(&self.0);
    }
}

pub fn write_rgba(dir: &Path, file_name: &str, width: u32, height: u32, color: [u8; 4]) {
    RgbaImage::from_pixel(width, height, Rgba(color))
        .save(dir.join(file_name))
        .unwrap();
}

pub fn write_rgb(dir: &Path, file_name: &str, width: u32, height: u32, color: [u8; 3]) {
    RgbImage::from_pixel(width, height, Rgb(color))
        .save(dir.join(file_name))
        .unwrap();
}

/// Every pixel of the `tile_size` cell at grid `(x, y)` is fully transparent.
pub fn cell_is_blank(sheet: &RgbaImage, x: u32, y: u32, tile_size: u32) -> bool {
    (0..tile_size).all(|dy| {
        (0..tile_size).all(|dx| sheet.get_pixel(x * tile_size + dx, y * tile_size + dy).0[3] == 0)
    })
}
