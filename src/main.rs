#![allow(missing_docs)]

use clap::{Parser, Subcommand};

mod cmd;

#[derive(Parser)]
#[command(name = "ttpdoc", about = "7 Days to Die server data extraction tools")]
struct Cli {
	#[command(subcommand)]
	command: Commands,
}

#[derive(Subcommand)]
enum Commands {
	Players(cmd::players::Args),
	Stats(cmd::stats::Args),
	Time(cmd::time::Args),
	Scan(cmd::scan::Args),
	World(cmd::world::Args),
}

fn main() {
	env_logger::init();

	if let Err(err) = run() {
		eprintln!("error: {err}");
		std::process::exit(1);
	}
}

fn run() -> ttpdoc::save::Result<()> {
	let cli = Cli::parse();

	match cli.command {
		Commands::Players(args) => cmd::players::run(args),
		Commands::Stats(args) => cmd::stats::run(args),
		Commands::Time(args) => cmd::time::run(args),
		Commands::Scan(args) => cmd::scan::run(args),
		Commands::World(args) => cmd::world::run(args),
	}
}
