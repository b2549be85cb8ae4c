use std::collections::BTreeMap;
use std::sync::LazyLock;

use log::debug;
use regex::Regex;
use serde::Serialize;

use crate::save::line::{LineClass, classify};
use crate::save::scalar::{Scalar, coerce};
use crate::save::vector::{Vec3, parse_vector_field};

/// Trailer line marking the end of an `lp` player-list response.
pub const PLAYER_LIST_TRAILER: &str = "in the game";
/// Key prefix used by `ggs` game-statistics responses.
pub const GAME_STAT_PREFIX: &str = "GameStat";
/// Key prefix used by `gg` game-preference responses.
pub const GAME_PREF_PREFIX: &str = "GamePref";

static DAY_TIME_RE: LazyLock<Regex> =
	LazyLock::new(|| Regex::new(r"(?i)^day\s+([0-9]+),\s*([0-9]+):([0-9]+)").expect("day/time regex compiles"));

/// One player's console-derived state.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PlayerSnapshot {
	/// World position, when the line carried a parseable `pos` vector.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub pos: Option<Vec3>,
	/// View rotation, when the line carried a parseable `rot` vector.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub rot: Option<Vec3>,
	/// Remaining `key=value` fields, coerced to typed scalars.
	#[serde(flatten)]
	pub fields: BTreeMap<Box<str>, Scalar>,
}

/// Flat field map produced by one `key = value` console block.
pub type StatBlock = BTreeMap<Box<str>, Scalar>;

/// In-game clock reading from a `gettime` response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GameTime {
	/// Day counter since world start.
	pub day: i64,
	/// Hour of day, 24h clock.
	pub hour: i64,
	/// Minute of hour.
	pub minute: i64,
}

/// Positional role of one comma-split `lp` line field.
///
/// The live console writes lines as
/// `0. id=171, Alice, pos=(-81.6, 66.1, -10.3), rot=(0.0, 90.0, 0.0), remote=True, ...`;
/// splitting on commas scatters each vector over three consecutive fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ListField {
	/// `N. ` prefix; any `key=value` text left after the ordinal is kept.
	Ordinal,
	/// Player name, the output key.
	Name,
	/// One of three comma-split position pieces.
	PosPiece,
	/// One of three comma-split rotation pieces.
	RotPiece,
}

/// Fixed head of the player-list schema; every field past it is `key=value`.
const PLAYER_LIST_SCHEMA: [ListField; 8] = [
	ListField::Ordinal,
	ListField::Name,
	ListField::PosPiece,
	ListField::PosPiece,
	ListField::PosPiece,
	ListField::RotPiece,
	ListField::RotPiece,
	ListField::RotPiece,
];

/// Parse an `lp` response into a map from player name to snapshot.
///
/// Lines that are not numbered list items are ignored; a list item whose
/// vectors or name cannot be extracted is dropped line-locally so sibling
/// players still come through. Parsing stops at the trailer line.
pub fn parse_player_list(response: &str) -> BTreeMap<Box<str>, PlayerSnapshot> {
	let mut players = BTreeMap::new();

	for raw in response.lines() {
		match classify(raw, Some(PLAYER_LIST_TRAILER)) {
			LineClass::Trailer => break,
			LineClass::ListItem { line } => match parse_list_line(line) {
				Some((name, snapshot)) => {
					players.insert(name, snapshot);
				}
				None => debug!("dropping malformed player list line: {line:?}"),
			},
			_ => {}
		}
	}

	players
}

fn parse_list_line(line: &str) -> Option<(Box<str>, PlayerSnapshot)> {
	let pieces: Vec<&str> = line.split(',').collect();
	if pieces.len() < PLAYER_LIST_SCHEMA.len() {
		return None;
	}

	let mut snapshot = PlayerSnapshot::default();
	let mut name: Option<&str> = None;
	let mut pos_field = String::new();
	let mut rot_field = String::new();

	for (index, piece) in pieces.iter().enumerate() {
		match PLAYER_LIST_SCHEMA.get(index) {
			Some(ListField::Ordinal) => {
				if let Some((_, rest)) = piece.split_once(". ") {
					if rest.contains('=') {
						insert_key_value(&mut snapshot.fields, rest);
					}
				}
			}
			Some(ListField::Name) => name = Some(strip_leading_space(piece)),
			// Vector pieces are rejoined by plain concatenation: the comma was
			// the split delimiter and each piece keeps its leading space.
			Some(ListField::PosPiece) => pos_field.push_str(piece),
			Some(ListField::RotPiece) => rot_field.push_str(piece),
			None => insert_key_value(&mut snapshot.fields, strip_leading_space(piece)),
		}
	}

	let name = name.filter(|value| !value.is_empty())?;
	snapshot.pos = Some(parse_vector_field(&pos_field).ok()?.1);
	snapshot.rot = Some(parse_vector_field(&rot_field).ok()?.1);

	if let Some(value) = snapshot.fields.get("remote") {
		let normalized = normalize_remote(value);
		snapshot.fields.insert("remote".into(), normalized);
	}

	Some((name.into(), snapshot))
}

fn insert_key_value(fields: &mut BTreeMap<Box<str>, Scalar>, piece: &str) {
	let Some((key, value)) = piece.split_once('=') else {
		return;
	};
	fields.insert(key.into(), coerce(value));
}

fn strip_leading_space(piece: &str) -> &str {
	piece.strip_prefix(' ').unwrap_or(piece)
}

/// Collapse a decoded `remote` field to a plain boolean.
fn normalize_remote(value: &Scalar) -> Scalar {
	match value {
		Scalar::Bool(flag) => Scalar::Bool(*flag),
		Scalar::Text(text) => Scalar::Bool(text.as_ref() == "True"),
		_ => Scalar::Bool(false),
	}
}

/// Parse a `key = value` block response (`ggs`, `gg`, ...) into a flat map.
///
/// Only keys carrying `{prefix}.` participate when a non-empty prefix is
/// given; the prefix is stripped from the stored key. Non-matching lines are
/// skipped silently.
pub fn parse_stat_block(response: &str, prefix: &str) -> StatBlock {
	let mut block = StatBlock::new();

	for raw in response.lines() {
		let LineClass::KeyValue { key, value } = classify(raw, None) else {
			continue;
		};

		let key = if prefix.is_empty() {
			key
		} else {
			match key.strip_prefix(prefix).and_then(|rest| rest.strip_prefix('.')) {
				Some(rest) => rest,
				None => continue,
			}
		};

		block.insert(key.into(), coerce(value));
	}

	block
}

/// Parse a `gettime` response (`DAY <n>, <hh>:<mm>`).
///
/// The query is one-shot, so only the final matching line is kept; later
/// matches overwrite earlier ones.
pub fn parse_game_time(response: &str) -> Option<GameTime> {
	let mut latest = None;

	for raw in response.lines() {
		let line = raw.strip_suffix('\r').unwrap_or(raw);
		if let Some(time) = parse_day_time_line(line) {
			latest = Some(time);
		}
	}

	latest
}

fn parse_day_time_line(line: &str) -> Option<GameTime> {
	let caps = DAY_TIME_RE.captures(line)?;
	Some(GameTime {
		day: caps[1].parse().ok()?,
		hour: caps[2].parse().ok()?,
		minute: caps[3].parse().ok()?,
	})
}

#[cfg(test)]
mod tests {
	use super::{GameTime, parse_game_time, parse_player_list, parse_stat_block};
	use crate::save::{Scalar, Vec3};

	const LP_RESPONSE: &str = concat!(
		"Executing command 'lp'\r\n",
		"0. id=171, Alice, pos=(10.0, 20.0, 30.0), rot=(0.0, 90.0, 0.0), remote=True, health=80, deaths=2\r\n",
		"1. id=172, Bob, pos=(1.5, 64.0, -3.25), rot=(12.0, 0.0, 0.0), remote=False, health=100, deaths=0\r\n",
		"Total of 2 in the game\r\n",
	);

	#[test]
	fn player_list_lines_become_keyed_snapshots() {
		let players = parse_player_list(LP_RESPONSE);
		assert_eq!(players.len(), 2);

		let alice = players.get("Alice").expect("Alice parsed");
		assert_eq!(
			alice.pos,
			Some(Vec3 {
				x: 10.0,
				y: 20.0,
				z: 30.0
			})
		);
		assert_eq!(
			alice.rot,
			Some(Vec3 {
				x: 0.0,
				y: 90.0,
				z: 0.0
			})
		);
		assert_eq!(alice.fields.get("health"), Some(&Scalar::Int(80)));
		assert_eq!(alice.fields.get("remote"), Some(&Scalar::Bool(true)));
		assert_eq!(alice.fields.get("id"), Some(&Scalar::Int(171)));

		let bob = players.get("Bob").expect("Bob parsed");
		assert_eq!(bob.fields.get("remote"), Some(&Scalar::Bool(false)));
	}

	#[test]
	fn malformed_vector_drops_only_that_line() {
		let response = concat!(
			"0. id=1, Alice, pos=(10.0, 20.0, 30.0), rot=(0.0, 90.0, 0.0), remote=True, health=80\r\n",
			"1. id=2, Mallory, pos=(oops, 20.0, 30.0), rot=(0.0, 90.0, 0.0), remote=True, health=80\r\n",
			"Total of 2 in the game\r\n",
		);
		let players = parse_player_list(response);
		assert_eq!(players.len(), 1);
		assert!(players.contains_key("Alice"));
	}

	#[test]
	fn parsing_stops_at_trailer() {
		let response = concat!(
			"Total of 0 in the game\r\n",
			"0. id=1, Ghost, pos=(0.0, 0.0, 0.0), rot=(0.0, 0.0, 0.0), remote=True, health=1\r\n",
		);
		assert!(parse_player_list(response).is_empty());
	}

	#[test]
	fn empty_body_yields_empty_map() {
		assert!(parse_player_list("Total of 0 in the game\r\n").is_empty());
	}

	#[test]
	fn stat_block_strips_prefix_and_carriage_return() {
		let response = concat!(
			"Executing command 'ggs'\r\n",
			"GameStat.BloodMoonDay = 7\r\n",
			"GameStat.DayLightLength = 18.0\r\n",
			"GameStat.EnemySpawnMode = True\r\n",
			"not a stat line\r\n",
		);
		let stats = parse_stat_block(response, "GameStat");
		assert_eq!(stats.len(), 3);
		assert_eq!(stats.get("BloodMoonDay"), Some(&Scalar::Int(7)));
		assert_eq!(stats.get("DayLightLength"), Some(&Scalar::Float(18.0)));
		assert_eq!(stats.get("EnemySpawnMode"), Some(&Scalar::Bool(true)));
	}

	#[test]
	fn foreign_prefix_lines_are_skipped() {
		let response = "GamePref.AirDropFrequency = 72\r\n";
		assert!(parse_stat_block(response, "GameStat").is_empty());
		let prefs = parse_stat_block(response, "GamePref");
		assert_eq!(prefs.get("AirDropFrequency"), Some(&Scalar::Int(72)));
	}

	#[test]
	fn game_time_parses_day_hour_minute() {
		let time = parse_game_time("DAY 12, 08:45\r\n").expect("time parses");
		assert_eq!(
			time,
			GameTime {
				day: 12,
				hour: 8,
				minute: 45
			}
		);
	}

	#[test]
	fn last_matching_time_line_wins() {
		let response = "Day 3, 10:15\r\nDay 4, 23:59\r\n";
		let time = parse_game_time(response).expect("time parses");
		assert_eq!(time.day, 4);
		assert_eq!(time.hour, 23);
		assert_eq!(time.minute, 59);
	}

	#[test]
	fn reparsing_is_idempotent() {
		assert_eq!(parse_player_list(LP_RESPONSE), parse_player_list(LP_RESPONSE));
	}
}
