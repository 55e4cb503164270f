use std::fmt;

/// Zero-based grid cell. These are cell indices, not pixel offsets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct GridPosition {
    pub x: u32,
    pub y: u32,
}

impl GridPosition {
    /// Top-left pixel of this cell on a sheet with `tile_size` tiles.
    pub fn pixel_offset(&self, tile_size: u32) -> (u32, u32) {
        (self.x * tile_size, self.y * tile_size)
    }
}

impl fmt::Display for GridPosition {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridShape {
    pub columns: u32,
    pub rows: u32,
}

impl GridShape {
    pub fn slots(&self) -> u32 {
        self.columns * self.rows
    }

    pub fn pixel_size(&self, tile_size: u32) -> (u32, u32) {
        (self.columns * tile_size, self.rows * tile_size)
    }
}

/// `columns = ceil(sqrt(total_slots))`, `rows = ceil(total_slots / columns)`.
/// There is always at least one slot, for the reserved "unknown" tile.
pub fn compute_grid_shape(total_slots: u32) -> GridShape {
    let total_slots = u64::from(total_slots.max(1));
    let mut columns = (total_slots as f64).sqrt() as u64;
    // float sqrt can land one off either way on large inputs
    while columns > 1 && (columns - 1) * (columns - 1) >= total_slots {
        columns -= 1;
    }
    while columns * columns < total_slots {
        columns += 1;
    }
    GridShape {
        columns: columns as u32,
        rows: total_slots.div_ceil(columns) as u32,
    }
}

pub fn assign_slot(index: u32, columns: u32) -> GridPosition {
    GridPosition {
        x: index % columns,
        y: index / columns,
    }
}
