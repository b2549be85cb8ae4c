use std::fs;
use std::path::Path;

use ttpdoc::save::Result;

/// Serialize a payload as pretty JSON on stdout.
pub(crate) fn emit_json(payload: &impl serde::Serialize) {
	let rendered = serde_json::to_string_pretty(payload).expect("payload serializes to json");
	println!("{rendered}");
}

/// Read a console transcript captured to a file.
pub(crate) fn read_transcript(path: &Path) -> Result<String> {
	Ok(fs::read_to_string(path)?)
}
