use std::sync::LazyLock;

use regex::Regex;

static LIST_ITEM_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[0-9]+\.\s").expect("list item regex compiles"));

/// Tag assigned to one console transcript line before dispatch.
///
/// Classification happens exactly once per line; per-command parsers match
/// on the tag instead of re-running pattern checks against line fragments.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineClass<'a> {
	/// Numbered list entry (`N. ...`), body follows the ordinal prefix.
	ListItem {
		/// Line content with the `N. ` prefix still attached.
		line: &'a str,
	},
	/// `key = value` pair.
	KeyValue {
		/// Key portion, trimmed.
		key: &'a str,
		/// Value portion, as written.
		value: &'a str,
	},
	/// Known block-terminating line.
	Trailer,
	/// Anything else; parsers ignore these.
	Other,
}

/// Classify one raw transcript line.
///
/// The trailing carriage return is stripped first. A line containing the
/// command's trailer marker wins over the other tags.
pub fn classify<'a>(raw: &'a str, trailer: Option<&str>) -> LineClass<'a> {
	let line = raw.strip_suffix('\r').unwrap_or(raw);

	if let Some(marker) = trailer {
		if !marker.is_empty() && line.contains(marker) {
			return LineClass::Trailer;
		}
	}

	if LIST_ITEM_RE.is_match(line) {
		return LineClass::ListItem { line };
	}

	if let Some((key, value)) = line.split_once(" = ") {
		return LineClass::KeyValue { key: key.trim(), value };
	}

	LineClass::Other
}
