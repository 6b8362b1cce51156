use std::path::PathBuf;

use clap::Parser;
use clap::Subcommand;
use clap::ValueEnum;

#[derive(Parser)]
#[command(
	author,
	version,
	about = "Collect storyboard identifiers for type-safe accessor generation.",
	long_about = "referee scans the storyboards of an iOS project and collects the identifiers \
	              that generated accessor code needs: table and collection cell reuse \
	              identifiers, view controller Storyboard IDs with their classes, and segue \
	              identifiers.\n\nQuick start:\n  referee init  Create a referee.toml\n  referee \
	              list  Show the storyboards that will be scanned\n  referee scan  Scan and \
	              report identifiers"
)]
pub struct RefereeCli {
	#[command(subcommand)]
	pub command: Option<Commands>,

	/// Path to the project root directory.
	#[arg(long, short, global = true)]
	pub path: Option<PathBuf>,

	/// Enable verbose output and debug logging.
	#[arg(long, short, global = true, default_value_t = false)]
	pub verbose: bool,

	/// Disable colored output.
	#[arg(long, global = true, default_value_t = false)]
	pub no_color: bool,

	/// Fail when a view controller has no Storyboard ID, overriding
	/// `error_on_missing_storyboard_ids` from referee.toml.
	#[arg(long, global = true, default_value_t = false)]
	pub error_on_missing_ids: bool,
}

#[derive(Subcommand)]
pub enum Commands {
	/// Create a sample referee.toml in the project root.
	///
	/// If the file already exists, this command is a no-op and exits
	/// successfully.
	Init,
	/// Scan every storyboard and report the identifiers found.
	///
	/// Exits with status 1 when `error_on_missing_storyboard_ids` is enabled
	/// and a view controller lacks a Storyboard ID, and with status 2 when a
	/// storyboard cannot be read or parsed.
	Scan {
		/// Output format. Use `text` for a human-readable summary or `json`
		/// for the input of a code generator.
		#[arg(long, value_enum, default_value_t = OutputFormat::Text)]
		format: OutputFormat,
	},
	/// List the storyboards that a scan would visit, in scan order.
	List,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum OutputFormat {
	/// Human-readable text output with colors and formatting.
	Text,
	/// JSON output containing the active config and one entry per
	/// storyboard.
	Json,
}
