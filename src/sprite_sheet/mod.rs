// Logo sprite sheet packer.
// Reads a directory of logos, normalizes each into a fixed-size tile, lays the
// tiles out on a near-square grid and writes the sheet plus a TypeScript
// lookup table of grid cells.
pub mod config;
pub mod discover;
pub mod grid;
pub mod mapping;
pub mod normalize;
pub mod output;

use std::{fs::File, io::BufReader, path::PathBuf};

use image::{imageops, DynamicImage, ImageReader, RgbaImage};
use log::{info, warn};
use tracy_full::zone;

pub use config::PackerConfig;
pub use discover::{discover_sources, SourceFile};
pub use grid::{assign_slot, compute_grid_shape, GridPosition, GridShape};
pub use mapping::SpriteMapping;
pub use normalize::normalize;
pub use output::{write_outputs, WrittenOutputs};

use crate::error::{ItemError, Result};

/// Identifier of slot 0, which is always left blank.
pub const UNKNOWN_IDENTIFIER: &str = "unknown";

#[derive(Debug)]
pub enum ItemOutcome {
    Packed(GridPosition),
    Failed(ItemError),
}

/// What happened to one source file. Its slot is consumed either way.
#[derive(Debug)]
pub struct PackedItem {
    pub identifier: String,
    pub file_name: String,
    pub slot: u32,
    pub outcome: ItemOutcome,
}

impl PackedItem {
    pub fn is_packed(&self) -> bool {
        matches!(self.outcome, ItemOutcome::Packed(_))
    }
}

/// The in-memory result of compositing, before anything is written.
pub struct Composited {
    pub sheet: RgbaImage,
    pub mapping: SpriteMapping,
    pub shape: GridShape,
    pub items: Vec<PackedItem>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackSummary {
    pub total_logos: usize,
    pub packed: usize,
    pub failed: usize,
    pub shape: GridShape,
    pub width: u32,
    pub height: u32,
    pub sheet_path: PathBuf,
    pub mapping_path: PathBuf,
    pub outputs: WrittenOutputs,
}

/// Opens and decodes one source image. The file handle is closed on return.
fn load_image(source: &SourceFile) -> std::result::Result<DynamicImage, ItemError> {
    zone!("load_image");
    let file = File::open(&source.path)?;
    let image = ImageReader::new(BufReader::new(file))
        .with_guessed_format()?
        .decode()?;
    Ok(image)
}

/// Draws every source onto a fresh sheet and builds the matching mapping.
///
/// Slot 0 is reserved for [`UNKNOWN_IDENTIFIER`], sources take slots 1..=N in
/// order. A source that fails to load leaves its slot blank and is left out of
/// the mapping; later sources keep their slots.
pub fn composite_and_emit(sources: &[SourceFile], tile_size: u32) -> Composited {
    zone!("composite_and_emit");
    let shape = compute_grid_shape(sources.len() as u32 + 1);
    let (width, height) = shape.pixel_size(tile_size);
    let mut sheet = RgbaImage::new(width, height);

    let items: Vec<PackedItem> = sources
        .iter()
        .enumerate()
        .fold(Vec::with_capacity(sources.len()), |mut items, (idx, source)| {
            zone!("pack_item");
            let slot = idx as u32 + 1;
            let outcome = match load_image(source) {
                Ok(image) => {
                    let position = assign_slot(slot, shape.columns);
                    let tile = normalize(&image, tile_size);
                    let (x, y) = position.pixel_offset(tile_size);
                    imageops::overlay(&mut sheet, &tile, x as i64, y as i64);
                    info!(
                        "Processed {} -> position {} -> {}",
                        source.file_name, position, source.identifier
                    );
                    ItemOutcome::Packed(position)
                }
                Err(err) => {
                    warn!("Error processing {}: {}", source.file_name, err);
                    ItemOutcome::Failed(err)
                }
            };
            items.push(PackedItem {
                identifier: source.identifier.clone(),
                file_name: source.file_name.clone(),
                slot,
                outcome,
            });
            items
        });

    let mut mapping = SpriteMapping::new();
    for item in &items {
        if let ItemOutcome::Packed(position) = item.outcome {
            mapping.insert(&item.identifier, position);
        }
    }

    Composited {
        sheet,
        mapping,
        shape,
        items,
    }
}

/// Runs the whole pipeline: discover, composite, write.
///
/// Nothing is written if discovery fails. Per-file failures are logged and
/// counted in the summary but do not fail the run.
pub fn pack(config: &PackerConfig) -> Result<PackSummary> {
    zone!("pack");
    config.validate()?;
    let sources = discover_sources(&config.source_dir, &config.extension)?;
    info!("Found {} logo files", sources.len());

    let composited = composite_and_emit(&sources, config.tile_size);
    let outputs = write_outputs(
        &composited.sheet,
        &composited.mapping,
        composited.shape,
        config,
    )?;

    let packed = composited.items.iter().filter(|item| item.is_packed()).count();
    let summary = PackSummary {
        total_logos: sources.len(),
        packed,
        failed: sources.len() - packed,
        shape: composited.shape,
        width: composited.sheet.width(),
        height: composited.sheet.height(),
        sheet_path: config.sheet_path.clone(),
        mapping_path: config.mapping_path.clone(),
        outputs,
    };

    info!("Dimensions: {}x{}", summary.width, summary.height);
    info!(
        "Grid: {} columns x {} rows",
        summary.shape.columns, summary.shape.rows
    );
    info!(
        "Total logos: {} ({} packed, {} skipped)",
        summary.total_logos, summary.packed, summary.failed
    );
    info!("Sheet digest: {}", summary.outputs.sheet_digest);

    Ok(summary)
}
