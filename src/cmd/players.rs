use std::path::PathBuf;

use ttpdoc::save::{Result, parse_player_list};

use crate::cmd::util::{emit_json, read_transcript};

#[derive(clap::Args)]
pub struct Args {
	/// Saved `lp` console transcript.
	pub transcript: PathBuf,
}

/// Parse a player-list transcript and print the snapshot map.
pub fn run(args: Args) -> Result<()> {
	let response = read_transcript(&args.transcript)?;
	let players = parse_player_list(&response);
	emit_json(&players);
	Ok(())
}
