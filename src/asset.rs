//! Asset representations

use crate::document::NodeId;
use crate::types::AssetId;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Kind of asset, fixed by the document section it was read from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AssetKind {
    /// Game object with behaviour
    Object,
    /// Sound effect or music track
    Sound,
    /// Animated or static sprite
    Sprite,
    /// Tile sheet used by rooms
    Tileset,
    /// Room background image
    Background,
    /// Playable room / level
    Room,
}

impl AssetKind {
    /// Every kind, in the order sections are ingested
    pub const ALL: [AssetKind; 6] = [
        AssetKind::Object,
        AssetKind::Sound,
        AssetKind::Sprite,
        AssetKind::Tileset,
        AssetKind::Background,
        AssetKind::Room,
    ];

    /// Tag of the document section holding assets of this kind
    pub fn section(self) -> &'static str {
        match self {
            AssetKind::Object => "objects",
            AssetKind::Sound => "sounds",
            AssetKind::Sprite => "sprites",
            AssetKind::Tileset => "tilesets",
            AssetKind::Background => "backgrounds",
            AssetKind::Room => "rooms",
        }
    }

    /// Resolve a kind from its section tag
    pub fn from_section(section: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.section() == section)
    }
}

impl fmt::Display for AssetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AssetKind::Object => write!(f, "Object"),
            AssetKind::Sound => write!(f, "Sound"),
            AssetKind::Sprite => write!(f, "Sprite"),
            AssetKind::Tileset => write!(f, "Tileset"),
            AssetKind::Background => write!(f, "Background"),
            AssetKind::Room => write!(f, "Room"),
        }
    }
}

impl FromStr for AssetKind {
    type Err = String;

    /// Accepts either the singular kind name or the section tag, case-insensitive
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let lower = s.to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|kind| kind.to_string().to_ascii_lowercase() == lower || kind.section() == lower)
            .ok_or_else(|| format!("unknown asset kind: {}", s))
    }
}

/// One loaded catalog entry
///
/// The record only holds a handle to its source node. Resolve it through
/// [`AssetCatalog::source_node`](crate::catalog::AssetCatalog::source_node),
/// which ties the borrowed view to the loaded document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetRecord {
    /// Unique identifier, stable while the record lives
    pub id: AssetId,
    /// Asset name, unique among live records
    pub name: String,
    /// Kind of asset
    pub kind: AssetKind,
    /// Handle of the originating document node
    pub node: NodeId,
}

impl AssetRecord {
    /// Create a new record
    pub fn new(id: AssetId, name: String, kind: AssetKind, node: NodeId) -> Self {
        Self { id, name, kind, node }
    }
}

impl fmt::Display for AssetRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Asset({}, {}, {})", self.id, self.name, self.kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_section_round_trip() {
        for kind in AssetKind::ALL {
            assert_eq!(AssetKind::from_section(kind.section()), Some(kind));
        }
        assert_eq!(AssetKind::from_section("scripts"), None);
    }

    #[test]
    fn test_kind_from_str() {
        assert_eq!("sprite".parse::<AssetKind>(), Ok(AssetKind::Sprite));
        assert_eq!("ROOMS".parse::<AssetKind>(), Ok(AssetKind::Room));
        assert!("shader".parse::<AssetKind>().is_err());
    }

    #[test]
    fn test_kind_serde_name() {
        let json = serde_json::to_string(&AssetKind::Tileset).unwrap();
        assert_eq!(json, "\"tileset\"");
    }

    #[test]
    fn test_record_display() {
        let record = AssetRecord::new(3, "Player".to_string(), AssetKind::Object, NodeId(7));
        assert_eq!(record.to_string(), "Asset(3, Player, Object)");
    }
}
