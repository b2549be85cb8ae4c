use std::collections::HashMap;
use std::sync::LazyLock;

use log::warn;
use regex::Regex;
use serde::Serialize;

use crate::save::{Result, SaveError};

static PLAYER_RE: LazyLock<Regex> =
	LazyLock::new(|| Regex::new(r"(?s)<player\b([^>]*?)(?:/>|>(.*?)</player>)").expect("player regex compiles"));
static ATTR_RE: LazyLock<Regex> =
	LazyLock::new(|| Regex::new(r#"([A-Za-z_][A-Za-z0-9_]*)="([^"]*)""#).expect("attr regex compiles"));
static LPBLOCK_POS_RE: LazyLock<Regex> =
	LazyLock::new(|| Regex::new(r#"<lpblock\b[^>]*\bpos="([^"]*)""#).expect("lpblock regex compiles"));
static BEDROLL_POS_RE: LazyLock<Regex> =
	LazyLock::new(|| Regex::new(r#"<bedroll\b[^>]*\bpos="([^"]*)""#).expect("bedroll regex compiles"));

/// One player's identity row from the world's `players.xml` listing.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlayerIdentity {
	/// Platform tag (`Steam`, `XBL`, ...).
	pub platform: Box<str>,
	/// Platform-scoped user id.
	pub userid: Box<str>,
	/// Display name; the key players are assembled under.
	pub playername: Box<str>,
	/// Last login timestamp text, as written by the server.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub lastlogin: Option<Box<str>>,
	/// Save record file name, derived as `{platform}_{userid}.ttp`.
	pub ttp_file: Box<str>,
	/// Land-claim block coordinate, when fully present.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub lpblock: Option<[i64; 3]>,
	/// Bedroll coordinate, when fully present.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub bedroll: Option<[i64; 3]>,
}

/// Parse a comma-separated coordinate triple, all-or-nothing.
///
/// Any empty or non-integer component, or a count other than three, makes
/// the whole coordinate absent; a partially filled triple is never produced.
pub fn parse_coord_triple(raw: &str) -> Option<[i64; 3]> {
	let mut coords = [0_i64; 3];
	let mut count = 0;

	for piece in raw.split(',') {
		if count == 3 {
			return None;
		}
		coords[count] = piece.trim().parse::<i64>().ok()?;
		count += 1;
	}

	if count == 3 { Some(coords) } else { None }
}

/// Extract player identities from `players.xml` text.
///
/// Entries missing a required attribute are skipped with a warning; one bad
/// row never hides the rest of the listing.
pub fn parse_players_index(xml: &str) -> Vec<PlayerIdentity> {
	let mut identities = Vec::new();

	for caps in PLAYER_RE.captures_iter(xml) {
		let attrs = parse_attrs(caps.get(1).map_or("", |m| m.as_str()));
		let body = caps.get(2).map_or("", |m| m.as_str());

		match identity_from_element(&attrs, body) {
			Ok(identity) => identities.push(identity),
			Err(err) => warn!("skipping players.xml entry: {err}"),
		}
	}

	identities
}

fn parse_attrs(text: &str) -> HashMap<&str, &str> {
	ATTR_RE
		.captures_iter(text)
		.filter_map(|caps| Some((caps.get(1)?.as_str(), caps.get(2)?.as_str())))
		.collect()
}

fn identity_from_element(attrs: &HashMap<&str, &str>, body: &str) -> Result<PlayerIdentity> {
	let platform = require_attr(attrs, "platform")?;
	let userid = require_attr(attrs, "userid")?;
	let playername = require_attr(attrs, "playername")?;

	let lpblock = LPBLOCK_POS_RE
		.captures(body)
		.and_then(|caps| parse_coord_triple(caps.get(1).map_or("", |m| m.as_str())));
	let bedroll = BEDROLL_POS_RE
		.captures(body)
		.and_then(|caps| parse_coord_triple(caps.get(1).map_or("", |m| m.as_str())));

	Ok(PlayerIdentity {
		platform: platform.into(),
		userid: userid.into(),
		playername: playername.into(),
		lastlogin: attrs.get("lastlogin").map(|value| Box::from(*value)),
		ttp_file: format!("{platform}_{userid}.ttp").into_boxed_str(),
		lpblock,
		bedroll,
	})
}

fn require_attr<'a>(attrs: &HashMap<&str, &'a str>, attr: &'static str) -> Result<&'a str> {
	attrs.get(attr).copied().ok_or(SaveError::PlayersIndexAttribute { attr })
}
