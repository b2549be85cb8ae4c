mod console;
mod error;
mod line;
mod players;
mod record;
mod registry;
mod scalar;
mod scan;
mod vector;
mod world;

/// Console block parsers and their output types.
pub use console::{GAME_PREF_PREFIX, GAME_STAT_PREFIX, GameTime, PLAYER_LIST_TRAILER, PlayerSnapshot, StatBlock, parse_game_time, parse_player_list, parse_stat_block};
/// Error and result aliases.
pub use error::{Result, SaveError};
/// Transcript line classification.
pub use line::{LineClass, classify};
/// Identity listing types and parsers.
pub use players::{PlayerIdentity, parse_coord_triple, parse_players_index};
/// Per-player record assembly.
pub use record::{PlayerRecord, assemble_record};
/// Marker catalog.
pub use registry::{ATTRIBUTES, FieldCategory, FieldRegistry, PERKS, SKILLS};
/// Scalar coercion.
pub use scalar::{Scalar, coerce};
/// Binary save-record scanning.
pub use scan::{FieldReport, MarkerCodec, MissingMarkers, ScanOptions, find_marker, scan_fields, scan_marker};
/// Vector field extraction.
pub use vector::{Vec3, parse_vector_field};
/// World directory loading and whole-world assembly.
pub use world::{WorldDir, assemble_world, assemble_world_dir};
