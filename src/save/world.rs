use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use log::{debug, warn};

use crate::save::console::PlayerSnapshot;
use crate::save::players::{PlayerIdentity, parse_players_index};
use crate::save::record::{PlayerRecord, assemble_record};
use crate::save::registry::FieldRegistry;
use crate::save::scan::{ScanOptions, scan_fields};
use crate::save::Result;

/// A world save directory (`Saves/{area}/{world}`).
///
/// Holds `players.xml` at its root and per-player `.ttp` records under
/// `Player/`.
#[derive(Debug, Clone)]
pub struct WorldDir {
	root: PathBuf,
}

impl WorldDir {
	/// Wrap a world save directory path.
	pub fn open(root: impl Into<PathBuf>) -> Self {
		Self { root: root.into() }
	}

	/// Path of the identity listing.
	pub fn players_xml_path(&self) -> PathBuf {
		self.root.join("players.xml")
	}

	/// Path of one player's save record.
	pub fn save_path(&self, identity: &PlayerIdentity) -> PathBuf {
		self.root.join("Player").join(identity.ttp_file.as_ref())
	}

	/// Read and parse the identity listing.
	pub fn load_identities(&self) -> Result<Vec<PlayerIdentity>> {
		let xml = fs::read_to_string(self.players_xml_path())?;
		Ok(parse_players_index(&xml))
	}

	/// Read one player's raw save record.
	pub fn load_save_blob(&self, identity: &PlayerIdentity) -> Result<Vec<u8>> {
		Ok(fs::read(self.save_path(identity))?)
	}
}

/// Assemble records for every player in a world directory.
///
/// Console snapshots, when supplied, are matched up by player name. A
/// missing or unscannable `.ttp` file demotes that player to an
/// identity-only record; it never aborts the other players.
pub fn assemble_world(
	world: &WorldDir,
	registry: &FieldRegistry,
	options: &ScanOptions,
	mut console: BTreeMap<Box<str>, PlayerSnapshot>,
) -> Result<BTreeMap<Box<str>, PlayerRecord>> {
	let identities = world.load_identities()?;
	let mut records = BTreeMap::new();

	for identity in identities {
		let fields = match world.load_save_blob(&identity) {
			Ok(blob) => match scan_fields(&blob, registry, options) {
				Ok(report) => Some(report),
				Err(err) => {
					warn!("scan failed for {}: {err}", identity.ttp_file);
					None
				}
			},
			Err(err) => {
				warn!("no readable save record for {}: {err}", identity.playername);
				None
			}
		};

		let snapshot = console.remove(identity.playername.as_ref());
		let name = identity.playername.clone();
		records.insert(name, assemble_record(identity, fields, snapshot));
	}

	for name in console.keys() {
		debug!("console snapshot for {name} has no players.xml entry");
	}

	Ok(records)
}

/// Convenience wrapper for callers holding a bare path and no console data.
pub fn assemble_world_dir(path: impl AsRef<Path>) -> Result<BTreeMap<Box<str>, PlayerRecord>> {
	let world = WorldDir::open(path.as_ref());
	assemble_world(&world, &FieldRegistry::standard(), &ScanOptions::default(), BTreeMap::new())
}
