use std::collections::BTreeMap;
use std::path::PathBuf;

use ttpdoc::save::{FieldRegistry, MissingMarkers, Result, ScanOptions, WorldDir, assemble_world, parse_player_list};

use crate::cmd::util::{emit_json, read_transcript};

#[derive(clap::Args)]
pub struct Args {
	/// World save directory (`Saves/{area}/{world}`).
	pub save_dir: PathBuf,
	/// Optional saved `lp` transcript to merge into the records.
	#[arg(long = "lp-transcript")]
	pub lp_transcript: Option<PathBuf>,
	/// Treat any absent registry marker as fatal instead of reporting it.
	#[arg(long = "fail-missing")]
	pub fail_missing: bool,
}

/// Assemble every player record in a world directory and print the map.
pub fn run(args: Args) -> Result<()> {
	let console = match &args.lp_transcript {
		Some(path) => parse_player_list(&read_transcript(path)?),
		None => BTreeMap::new(),
	};

	let options = ScanOptions {
		missing: if args.fail_missing { MissingMarkers::Fail } else { MissingMarkers::Skip },
		..ScanOptions::default()
	};

	let world = WorldDir::open(&args.save_dir);
	let records = assemble_world(&world, &FieldRegistry::standard(), &options, console)?;

	emit_json(&records);
	Ok(())
}
