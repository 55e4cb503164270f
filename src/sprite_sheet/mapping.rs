use std::collections::BTreeMap;

use super::{
    config::PackerConfig,
    grid::{GridPosition, GridShape},
    UNKNOWN_IDENTIFIER,
};

/// Identifier to grid cell, always sorted by identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpriteMapping {
    positions: BTreeMap<String, GridPosition>,
}

impl Default for SpriteMapping {
    fn default() -> Self {
        Self::new()
    }
}

impl SpriteMapping {
    /// A mapping holding only the reserved `unknown` entry at (0, 0).
    pub fn new() -> Self {
        let mut positions = BTreeMap::new();
        positions.insert(
            UNKNOWN_IDENTIFIER.to_owned(),
            GridPosition { x: 0, y: 0 },
        );
        SpriteMapping { positions }
    }

    /// Records `identifier` at `position`, returning the position it replaced.
    pub fn insert(&mut self, identifier: &str, position: GridPosition) -> Option<GridPosition> {
        self.positions.insert(identifier.to_owned(), position)
    }

    pub fn get(&self, identifier: &str) -> Option<GridPosition> {
        self.positions.get(identifier).copied()
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, GridPosition)> {
        self.positions
            .iter()
            .map(|(identifier, position)| (identifier.as_str(), *position))
    }

    /// Renders the generated TypeScript module consumed by the front-end.
    pub fn to_typescript(&self, shape: GridShape, config: &PackerConfig) -> String {
        let mut out = format!(
            "export const {} = {};\nexport const {} = {};\nexport const {} = {};\n\n",
            config.tile_size_const,
            config.tile_size,
            config.columns_const,
            shape.columns,
            config.rows_const,
            shape.rows,
        );
        out.push_str(&format!(
            "export const {}: Record<string, {{ x: number; y: number }}> = {{\n",
            config.positions_const
        ));
        for (identifier, position) in self.iter() {
            out.push_str(&format!(
                "  {}: {{ x: {}, y: {} }},\n",
                typescript_key(identifier),
                position.x,
                position.y
            ));
        }
        out.push_str("};\n\n");
        out
    }
}

/// Bare when `key` is a plain identifier, otherwise a quoted string literal.
pub fn typescript_key(key: &str) -> String {
    if is_plain_identifier(key) {
        key.to_owned()
    } else {
        serde_json::Value::String(key.to_owned()).to_string()
    }
}

fn is_plain_identifier(key: &str) -> bool {
    let mut chars = key.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() || first == '_' || first == '$' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$')
}
