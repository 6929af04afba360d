use self::commands::{Args, Command};
use clap::Parser;
use slashpath_error::{Result, WrapErr};
use tracing_subscriber::prelude::*;

mod commands;
mod util;

fn main() {
	// Parse the arguments.
	let args = Args::parse();

	// Setup tracing and run the command.
	let result = setup_tracing().and_then(|()| run(args));

	// Handle the result.
	if let Err(error) = result {
		// Print the error trace.
		eprintln!("An error occurred.");
		eprintln!("{}", error.trace());

		// Exit with a non-zero code.
		std::process::exit(1);
	}
}

fn run(args: Args) -> Result<()> {
	match args.command {
		Command::Create(args) => commands::create::run(args),
		Command::JoinOnly(args) => commands::join_only::run(args),
		Command::Join(args) => commands::join::run(args),
		Command::Normalize(args) => commands::normalize::run(args),
	}
}

fn setup_tracing() -> Result<()> {
	// Create the env layer.
	let Ok(env_filter) = std::env::var("SLASHPATH_TRACING") else {
		return Ok(());
	};
	let env_layer = tracing_subscriber::filter::EnvFilter::try_new(&env_filter)
		.wrap_err_with(|| format!(r#"Failed to parse the tracing filter "{env_filter}"."#))?;

	// Create and initialize the subscriber.
	let format_layer = tracing_subscriber::fmt::layer()
		.compact()
		.with_span_events(tracing_subscriber::fmt::format::FmtSpan::NEW)
		.with_writer(std::io::stderr);
	let subscriber = tracing_subscriber::registry()
		.with(env_layer)
		.with(format_layer);
	subscriber.init();

	Ok(())
}
