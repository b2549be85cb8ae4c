use std::path::PathBuf;

use ttpdoc::save::{Result, parse_game_time};

use crate::cmd::util::{emit_json, read_transcript};

#[derive(clap::Args)]
pub struct Args {
	/// Saved `gettime` console transcript.
	pub transcript: PathBuf,
}

/// Parse a day/time transcript and print the clock reading.
pub fn run(args: Args) -> Result<()> {
	let response = read_transcript(&args.transcript)?;
	emit_json(&parse_game_time(&response));
	Ok(())
}
