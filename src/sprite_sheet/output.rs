use std::{
    fs,
    io::Write,
    path::{Path, PathBuf},
};

use image::RgbaImage;
use log::info;
use tracy_full::zone;

use super::{config::PackerConfig, grid::GridShape, mapping::SpriteMapping};
use crate::{
    error::{Error, Result},
    hash::digest,
};

/// Content digests of what was written, for the run summary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WrittenOutputs {
    pub sheet_digest: String,
    pub mapping_digest: String,
}

/// Writes the sheet PNG and the TypeScript mapping. Each file is either fully
/// replaced or left as it was.
pub fn write_outputs(
    sheet: &RgbaImage,
    mapping: &SpriteMapping,
    shape: GridShape,
    config: &PackerConfig,
) -> Result<WrittenOutputs> {
    zone!("write_outputs");
    let png_bytes = encode_png(sheet, &config.sheet_path)?;
    write_atomic(&config.sheet_path, &png_bytes)?;
    info!("Sprite sheet created: {}", config.sheet_path.display());

    let typescript = mapping.to_typescript(shape, config);
    write_atomic(&config.mapping_path, typescript.as_bytes())?;
    info!("TypeScript mapping created: {}", config.mapping_path.display());

    Ok(WrittenOutputs {
        sheet_digest: digest(&png_bytes),
        mapping_digest: digest(&typescript),
    })
}

/// 8-bit RGBA PNG, alpha preserved.
pub fn encode_png(image: &RgbaImage, path: &Path) -> Result<Vec<u8>> {
    zone!("encode_png");
    let encoding_error = |source| Error::Encoding {
        path: path.to_path_buf(),
        source,
    };
    let mut bytes = Vec::new();
    {
        let mut encoder = png::Encoder::new(&mut bytes, image.width(), image.height());
        encoder.set_color(png::ColorType::Rgba);
        encoder.set_depth(png::BitDepth::Eight);
        let mut writer = encoder.write_header().map_err(encoding_error)?;
        writer
            .write_image_data(image.as_raw())
            .map_err(encoding_error)?;
        writer.finish().map_err(encoding_error)?;
    }
    Ok(bytes)
}

/// Writes to a sibling temp file, then renames it over `path`.
fn write_atomic(path: &Path, data: &[u8]) -> Result<()> {
    zone!("write_atomic");
    let output_error = |source| Error::Output {
        path: path.to_path_buf(),
        source,
    };
    if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(output_error)?;
    }

    let temp_path = temp_path_for(path);
    let written = fs::File::create(&temp_path).and_then(|mut file| {
        file.write_all(data)?;
        file.sync_all()
    });
    if let Err(err) = written.and_then(|_| fs::rename(&temp_path, path)) {
        let _ = fs::remove_file(&temp_path);
        return Err(output_error(err));
    }
    Ok(())
}

fn temp_path_for(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(|name| name.to_os_string())
        .unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}
