use std::fs;
use std::path::PathBuf;

use ttpdoc::save::{FieldRegistry, MissingMarkers, Result, ScanOptions, scan_fields};

use crate::cmd::util::emit_json;

#[derive(clap::Args)]
pub struct Args {
	/// Player `.ttp` save record.
	pub ttp_file: PathBuf,
	/// Treat any absent registry marker as fatal instead of reporting it.
	#[arg(long = "fail-missing")]
	pub fail_missing: bool,
}

/// Scan one save record for every known marker and print the report.
pub fn run(args: Args) -> Result<()> {
	let blob = fs::read(&args.ttp_file)?;

	let options = ScanOptions {
		missing: if args.fail_missing { MissingMarkers::Fail } else { MissingMarkers::Skip },
		..ScanOptions::default()
	};
	let report = scan_fields(&blob, &FieldRegistry::standard(), &options)?;

	emit_json(&report);
	Ok(())
}
