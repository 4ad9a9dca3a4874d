//! Piece-weight configuration for material evaluation.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::types::{PieceKind, Score};

/// Named mapping from piece kind to its positive material weight, in
/// pawn-equivalent units.
///
/// The king weight is a heuristic sentinel that dominates the material sum;
/// it is never an authority on game termination, which belongs to the rules
/// backend alone.
///
/// Loadable from TOML; omitted keys keep their defaults:
///
/// ```toml
/// queen = 10
/// rook = 5
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PieceValueTable {
    pub pawn: Score,
    pub knight: Score,
    pub bishop: Score,
    pub rook: Score,
    pub queen: Score,
    pub king: Score,
}

impl Default for PieceValueTable {
    fn default() -> Self {
        Self {
            pawn: 1,
            knight: 3,
            bishop: 3,
            rook: 5,
            queen: 9,
            king: 1000,
        }
    }
}

impl PieceValueTable {
    pub fn value(&self, kind: PieceKind) -> Score {
        match kind {
            PieceKind::Pawn => self.pawn,
            PieceKind::Knight => self.knight,
            PieceKind::Bishop => self.bishop,
            PieceKind::Rook => self.rook,
            PieceKind::Queen => self.queen,
            PieceKind::King => self.king,
        }
    }

    /// Parse a table from TOML text.
    pub fn from_toml_str(text: &str) -> Result<Self, String> {
        toml::from_str(text).map_err(|e| format!("Failed to parse piece values: {}", e))
    }

    /// Load a table from a TOML file.
    pub fn load(path: &Path) -> Result<Self, String> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| format!("Failed to read {}: {}", path.display(), e))?;
        Self::from_toml_str(&contents)
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod config_tests;
