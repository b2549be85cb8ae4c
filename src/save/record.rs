use serde::Serialize;

use crate::save::console::PlayerSnapshot;
use crate::save::players::PlayerIdentity;
use crate::save::scan::FieldReport;

/// Unified per-player output combining identity, save-record, and console data.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlayerRecord {
	/// Identity row from the players.xml listing.
	pub info: PlayerIdentity,
	/// Decoded save-record fields, when the `.ttp` blob was readable.
	/// A `None` flattens to no entries at all.
	#[serde(flatten)]
	pub fields: Option<FieldReport>,
	/// Console-derived live state, when an `lp` snapshot was supplied.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub console: Option<PlayerSnapshot>,
}

/// Combine one player's sources into a record.
///
/// Either source may be absent; an identity row alone still produces a
/// record, so a player with an unreadable save file is reported rather
/// than dropped.
pub fn assemble_record(info: PlayerIdentity, fields: Option<FieldReport>, console: Option<PlayerSnapshot>) -> PlayerRecord {
	PlayerRecord { info, fields, console }
}
