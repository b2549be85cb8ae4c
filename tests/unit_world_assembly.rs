#![allow(missing_docs)]

use std::collections::BTreeMap;
use std::fs;
use std::path::PathBuf;

use ttpdoc::save::{FieldRegistry, ScanOptions, WorldDir, assemble_world, assemble_world_dir, parse_player_list};

const PLAYERS_XML: &str = concat!(
	"<persistentplayerdata>\n",
	"  <player platform=\"Steam\" userid=\"101\" playername=\"Alice\" lastlogin=\"2026-08-20T18:02:11\">\n",
	"    <lpblock pos=\"100,64,-200\"/>\n",
	"    <bedroll pos=\"101,64,-199\"/>\n",
	"  </player>\n",
	"  <player platform=\"Steam\" userid=\"102\" playername=\"Bob\" lastlogin=\"2026-08-21T03:40:56\"/>\n",
	"</persistentplayerdata>\n",
);

const LP_TRANSCRIPT: &str = concat!(
	"0. id=171, Alice, pos=(100.5, 64.0, -200.25), rot=(0.0, 90.0, 0.0), remote=True, health=147\r\n",
	"Total of 1 in the game\r\n",
);

const TEST_REGISTRY: FieldRegistry = FieldRegistry {
	attributes: &["attstrength", "attagility"],
	skills: &["skillarchery"],
	perks: &["perkparkour"],
};

fn scratch_world(tag: &str) -> PathBuf {
	let root = std::env::temp_dir().join(format!("ttpdoc_world_{}_{tag}", std::process::id()));
	let _ = fs::remove_dir_all(&root);
	fs::create_dir_all(root.join("Player")).expect("scratch dir creates");
	fs::write(root.join("players.xml"), PLAYERS_XML).expect("players.xml writes");
	root
}

fn ttp_blob(markers: &[(&str, u8)]) -> Vec<u8> {
	let mut blob = vec![0x74, 0x74, 0x70, 0x00];
	for (marker, value) in markers {
		blob.extend_from_slice(marker.as_bytes());
		blob.push(*value);
		blob.extend_from_slice(&[0x00, 0x7f]);
	}
	blob
}

#[test]
fn world_assembly_merges_identity_save_and_console_data() {
	let root = scratch_world("merge");
	let blob = ttp_blob(&[("attstrength", 5), ("attagility", 3), ("skillarchery", 2), ("perkparkour", 1)]);
	fs::write(root.join("Player").join("Steam_101.ttp"), blob).expect("ttp writes");

	let console = parse_player_list(LP_TRANSCRIPT);
	let world = WorldDir::open(&root);
	let records = assemble_world(&world, &TEST_REGISTRY, &ScanOptions::default(), console).expect("world assembles");

	assert_eq!(records.len(), 2);

	let alice = records.get("Alice").expect("Alice assembled");
	assert_eq!(alice.info.ttp_file.as_ref(), "Steam_101.ttp");
	assert_eq!(alice.info.lpblock, Some([100, 64, -200]));

	let fields = alice.fields.as_ref().expect("Alice has save fields");
	assert_eq!(fields.attributes.get("attstrength"), Some(&5));
	assert_eq!(fields.skills.get("skillarchery"), Some(&2));
	assert_eq!(fields.perks.get("perkparkour"), Some(&1));
	assert!(fields.missing.is_empty());

	let console = alice.console.as_ref().expect("Alice has console data");
	assert_eq!(console.pos.map(|pos| pos.y), Some(64.0));

	let _ = fs::remove_dir_all(&root);
}

#[test]
fn player_without_save_record_is_kept_as_identity_only() {
	let root = scratch_world("identity_only");
	let blob = ttp_blob(&[("attstrength", 9)]);
	fs::write(root.join("Player").join("Steam_101.ttp"), blob).expect("ttp writes");

	let world = WorldDir::open(&root);
	let records = assemble_world(&world, &TEST_REGISTRY, &ScanOptions::default(), BTreeMap::new()).expect("world assembles");

	let bob = records.get("Bob").expect("Bob assembled");
	assert!(bob.fields.is_none());
	assert!(bob.console.is_none());
	assert_eq!(bob.info.platform.as_ref(), "Steam");

	// Alice's blob only carried one registry marker; the rest are reported.
	let alice = records.get("Alice").expect("Alice assembled");
	let fields = alice.fields.as_ref().expect("Alice has save fields");
	assert_eq!(fields.attributes.get("attstrength"), Some(&9));
	assert_eq!(fields.missing.len(), 3);

	let _ = fs::remove_dir_all(&root);
}

#[test]
fn default_loader_reports_unknown_markers_instead_of_failing() {
	let root = scratch_world("default_loader");
	let blob = ttp_blob(&[("attstrength", 5)]);
	fs::write(root.join("Player").join("Steam_101.ttp"), blob).expect("ttp writes");

	// The standard registry is much larger than this blob; every absent
	// marker lands in `missing` and the record still assembles.
	let records = assemble_world_dir(&root).expect("world assembles");
	let fields = records.get("Alice").expect("Alice assembled").fields.as_ref().expect("Alice has save fields");
	assert_eq!(fields.attributes.get("attstrength"), Some(&5));
	assert!(!fields.missing.is_empty());

	let _ = fs::remove_dir_all(&root);
}

#[test]
fn assembled_records_serialize_with_info_block() {
	let root = scratch_world("serialize");
	let blob = ttp_blob(&[("attstrength", 5), ("attagility", 3), ("skillarchery", 2), ("perkparkour", 1)]);
	fs::write(root.join("Player").join("Steam_101.ttp"), blob).expect("ttp writes");

	let world = WorldDir::open(&root);
	let records = assemble_world(&world, &TEST_REGISTRY, &ScanOptions::default(), BTreeMap::new()).expect("world assembles");
	let json = serde_json::to_value(&records).expect("records serialize");

	assert_eq!(json["Alice"]["info"]["userid"], "101");
	assert_eq!(json["Alice"]["info"]["lastlogin"], "2026-08-20T18:02:11");
	assert_eq!(json["Alice"]["attributes"]["attstrength"], 5);
	assert_eq!(json["Bob"]["info"]["playername"], "Bob");
	assert!(json["Bob"].get("attributes").is_none());

	let _ = fs::remove_dir_all(&root);
}
