use std::collections::BTreeMap;

use serde::Serialize;

use crate::save::registry::{FieldCategory, FieldRegistry};
use crate::save::{Result, SaveError};

/// Strategy for decoding a marker's stored value.
///
/// The on-disk `.ttp` layout is inferred, not documented; the codec is a
/// named seam so a more accurate decoder (length-prefixed, multi-byte) can
/// replace the current heuristic without touching the registry or the scan
/// contract. Values are widened to `u64` for the same reason.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MarkerCodec {
	/// Read the single unsigned byte immediately after the marker text.
	///
	/// Known approximation: fields wider than one byte, or values above
	/// 255, will misdecode.
	#[default]
	ByteAfterMarker,
}

impl MarkerCodec {
	fn decode(self, blob: &[u8], marker_end: usize) -> Option<u64> {
		match self {
			Self::ByteAfterMarker => blob.get(marker_end).map(|byte| u64::from(*byte)),
		}
	}
}

/// Policy for registry markers absent from a blob.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MissingMarkers {
	/// Record the marker under `missing` and keep scanning.
	#[default]
	Skip,
	/// Abort the scan with [`SaveError::MarkerNotFound`].
	Fail,
}

/// Behavior switches for a registry scan.
#[derive(Debug, Clone, Copy, Default)]
pub struct ScanOptions {
	/// Value decoding strategy.
	pub codec: MarkerCodec,
	/// Missing-marker policy.
	pub missing: MissingMarkers,
}

/// Decoded marker values from one save record, partitioned by category.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct FieldReport {
	/// Attribute marker values.
	pub attributes: BTreeMap<Box<str>, u64>,
	/// Skill marker values.
	pub skills: BTreeMap<Box<str>, u64>,
	/// Perk marker values.
	pub perks: BTreeMap<Box<str>, u64>,
	/// Markers never found in the blob (empty under [`MissingMarkers::Fail`]).
	#[serde(skip_serializing_if = "Vec::is_empty")]
	pub missing: Vec<Box<str>>,
}

/// Locate a marker's first byte-for-byte occurrence in a blob.
pub fn find_marker(blob: &[u8], marker: &str) -> Option<usize> {
	let needle = marker.as_bytes();
	if needle.is_empty() || needle.len() > blob.len() {
		return None;
	}
	blob.windows(needle.len()).position(|window| window == needle)
}

/// Decode one marker's value from a blob.
pub fn scan_marker(blob: &[u8], marker: &str, codec: MarkerCodec) -> Result<u64> {
	let start = find_marker(blob, marker).ok_or_else(|| SaveError::MarkerNotFound { marker: marker.to_owned() })?;
	codec
		.decode(blob, start + marker.len())
		.ok_or_else(|| SaveError::MarkerNotFound { marker: marker.to_owned() })
}

/// Scan every registry marker in a blob.
///
/// Each marker is looked up independently from the start of the blob; the
/// blob is never mutated. Markers are assumed to appear at most once.
pub fn scan_fields(blob: &[u8], registry: &FieldRegistry, options: &ScanOptions) -> Result<FieldReport> {
	let mut report = FieldReport::default();

	for (marker, category) in registry.iter() {
		let value = match scan_marker(blob, marker, options.codec) {
			Ok(value) => value,
			Err(err) => match options.missing {
				MissingMarkers::Skip => {
					report.missing.push(marker.into());
					continue;
				}
				MissingMarkers::Fail => return Err(err),
			},
		};

		let bucket = match category {
			FieldCategory::Attribute => &mut report.attributes,
			FieldCategory::Skill => &mut report.skills,
			FieldCategory::Perk => &mut report.perks,
		};
		bucket.insert(marker.into(), value);
	}

	Ok(report)
}
