use serde::Serialize;

use crate::save::{Result, SaveError};

/// Named 3D point used for player position and rotation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Vec3 {
	/// East/west coordinate.
	pub x: f64,
	/// Vertical coordinate.
	pub y: f64,
	/// North/south coordinate.
	pub z: f64,
}

/// Parse a `name=(v1 v2 v3)` console field into its name and vector.
///
/// The body has its outer parentheses stripped and is split on internal
/// whitespace; exactly three float components are required. The returned
/// name is as-given; callers strip the leading space before keying on it.
pub fn parse_vector_field(field: &str) -> Result<(&str, Vec3)> {
	let Some((name, body)) = field.split_once('=') else {
		return Err(SaveError::VectorMissingDelimiter { field: field.to_owned() });
	};

	let body = body.trim();
	let body = body.strip_prefix('(').unwrap_or(body);
	let body = body.strip_suffix(')').unwrap_or(body);

	let pieces: Vec<&str> = body.split_whitespace().collect();
	if pieces.len() != 3 {
		return Err(SaveError::VectorArity {
			field: name.trim_start().to_owned(),
			count: pieces.len(),
		});
	}

	let mut coords = [0.0_f64; 3];
	for (slot, piece) in coords.iter_mut().zip(&pieces) {
		// Live console output writes vectors as `(x, y, z)`; accept the
		// comma-bearing form as well as the reassembled space-separated one.
		let cleaned = piece.trim_end_matches(',');
		*slot = cleaned.parse::<f64>().map_err(|_| SaveError::VectorComponent {
			field: name.trim_start().to_owned(),
			piece: (*piece).to_owned(),
		})?;
	}

	Ok((
		name,
		Vec3 {
			x: coords[0],
			y: coords[1],
			z: coords[2],
		},
	))
}
