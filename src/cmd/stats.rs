use std::path::PathBuf;

use ttpdoc::save::{GAME_STAT_PREFIX, Result, parse_stat_block};

use crate::cmd::util::{emit_json, read_transcript};

#[derive(clap::Args)]
pub struct Args {
	/// Saved `ggs`/`gg`/`getoptions` console transcript.
	pub transcript: PathBuf,
	/// Key prefix to strip (`GameStat`, `GamePref`, ...); empty keeps every pair.
	#[arg(long, default_value = GAME_STAT_PREFIX)]
	pub prefix: String,
}

/// Parse a `key = value` block transcript and print the stat map.
pub fn run(args: Args) -> Result<()> {
	let response = read_transcript(&args.transcript)?;
	let stats = parse_stat_block(&response, &args.prefix);
	emit_json(&stats);
	Ok(())
}
