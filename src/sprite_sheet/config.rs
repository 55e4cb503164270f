use std::path::PathBuf;

use crate::error::{Error, Result};

/// 2x the 128px logical display size, for retina screens.
pub const DEFAULT_TILE_SIZE: u32 = 256;

/// Everything the packer needs to know about where to read and write.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackerConfig {
    pub source_dir: PathBuf,
    /// Extension of source images, without the dot. Matched case-insensitively.
    pub extension: String,
    pub tile_size: u32,
    pub sheet_path: PathBuf,
    pub mapping_path: PathBuf,
    pub tile_size_const: String,
    pub columns_const: String,
    pub rows_const: String,
    pub positions_const: String,
}

impl Default for PackerConfig {
    fn default() -> Self {
        PackerConfig {
            source_dir: PathBuf::from("logos"),
            extension: String::from("png"),
            tile_size: DEFAULT_TILE_SIZE,
            sheet_path: PathBuf::from("../../src/frontend/assets/img/car_manufacturer.png"),
            mapping_path: PathBuf::from(
                "../../src/frontend/components/Standings/components/CarManufacturer/carManufacturerSpritePositions.ts",
            ),
            tile_size_const: String::from("SPRITE_SIZE"),
            columns_const: String::from("SPRITES_PER_ROW"),
            rows_const: String::from("SPRITES_PER_COLUMN"),
            positions_const: String::from("CAR_MANUFACTURER_SPRITE_POSITIONS"),
        }
    }
}

impl PackerConfig {
    /// Same defaults, rooted at other input/output locations.
    pub fn with_paths(
        source_dir: impl Into<PathBuf>,
        sheet_path: impl Into<PathBuf>,
        mapping_path: impl Into<PathBuf>,
    ) -> Self {
        PackerConfig {
            source_dir: source_dir.into(),
            sheet_path: sheet_path.into(),
            mapping_path: mapping_path.into(),
            ..PackerConfig::default()
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.tile_size == 0 {
            return Err(Error::InvalidConfig(String::from(
                "tile size must be greater than zero",
            )));
        }
        if self.extension.is_empty() || self.extension.starts_with('.') {
            return Err(Error::InvalidConfig(format!(
                "extension must be non-empty and given without a leading dot, got '{}'",
                self.extension
            )));
        }
        Ok(())
    }
}
