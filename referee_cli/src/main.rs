use std::path::Path;
use std::path::PathBuf;
use std::process;

use clap::Parser;
use owo_colors::OwoColorize;
use referee_cli::Commands;
use referee_cli::OutputFormat;
use referee_cli::RefereeCli;
use referee_core::DiagnosticSink;
use referee_core::ProjectContext;
use referee_core::RefereeConfig;
use referee_core::RefereeError;
use referee_core::ResourceGroup;
use referee_core::ScanDiagnostic;
use referee_core::TracingSink;
use tracing_subscriber::EnvFilter;

static USE_COLOR: std::sync::atomic::AtomicBool = std::sync::atomic::AtomicBool::new(true);

fn color_enabled() -> bool {
	USE_COLOR.load(std::sync::atomic::Ordering::Relaxed)
}

/// Apply ANSI color codes only when color is enabled.
macro_rules! colored {
	($text:expr,red) => {
		if color_enabled() {
			format!("{}", $text.red())
		} else {
			format!("{}", $text)
		}
	};
	($text:expr,green) => {
		if color_enabled() {
			format!("{}", $text.green())
		} else {
			format!("{}", $text)
		}
	};
	($text:expr,yellow) => {
		if color_enabled() {
			format!("{}", $text.yellow())
		} else {
			format!("{}", $text)
		}
	};
	($text:expr,bold) => {
		if color_enabled() {
			format!("{}", $text.bold())
		} else {
			format!("{}", $text)
		}
	};
}

fn main() {
	let args = RefereeCli::parse();

	// Respect NO_COLOR env var and --no-color flag.
	let use_color = !args.no_color && std::env::var_os("NO_COLOR").is_none();
	if !use_color {
		USE_COLOR.store(false, std::sync::atomic::Ordering::Relaxed);
	}

	init_tracing(args.verbose, use_color);

	miette::set_hook(Box::new(move |_| {
		Box::new(
			miette::MietteHandlerOpts::new()
				.color(use_color)
				.unicode(use_color)
				.build(),
		)
	}))
	.ok();

	let result = match args.command {
		Some(Commands::Init) => run_init(&args),
		Some(Commands::Scan { format }) => run_scan(&args, format),
		Some(Commands::List) => run_list(&args),
		None => {
			eprintln!("No subcommand specified. Run `referee --help` for usage.");
			process::exit(1);
		}
	};

	if let Err(e) = result {
		match e.downcast::<RefereeError>() {
			Ok(referee_err) => {
				let code = match *referee_err {
					RefereeError::MissingViewControllerIds { .. } => 1,
					_ => 2,
				};
				let report: miette::Report = (*referee_err).into();
				eprintln!("{report:?}");
				process::exit(code);
			}
			Err(e) => {
				eprintln!("{} {e}", colored!("error:", red));
				process::exit(2);
			}
		}
	}
}

/// Log to stderr. `RUST_LOG` wins over the defaults.
fn init_tracing(verbose: bool, use_color: bool) {
	let default_directive = if verbose { "referee_core=debug" } else { "warn" };
	let filter = EnvFilter::try_from_default_env()
		.unwrap_or_else(|_| EnvFilter::new(default_directive));

	tracing_subscriber::fmt()
		.with_env_filter(filter)
		.with_writer(std::io::stderr)
		.with_ansi(use_color)
		.with_target(false)
		.init();
}

fn resolve_root(args: &RefereeCli) -> PathBuf {
	args.path
		.clone()
		.unwrap_or_else(|| std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")))
}

fn make_relative(path: &Path, root: &Path) -> String {
	path.strip_prefix(root)
		.unwrap_or(path)
		.display()
		.to_string()
}

/// Load the config, apply command line overrides and build the manifest.
fn load_context(args: &RefereeCli) -> Result<ProjectContext, Box<dyn std::error::Error>> {
	let root = resolve_root(args);
	let mut config = RefereeConfig::load_or_default(&root)?;
	if args.error_on_missing_ids {
		config.error_on_missing_storyboard_ids = true;
	}

	Ok(ProjectContext::with_config(&root, config)?)
}

/// Prints warnings as they are found. Fatal diagnostics are left to the
/// error report printed on exit.
struct ConsoleSink {
	root: PathBuf,
	warnings: usize,
}

impl DiagnosticSink for ConsoleSink {
	fn report(&mut self, diagnostic: &ScanDiagnostic) {
		if diagnostic.is_error() {
			return;
		}

		self.warnings += 1;
		eprintln!(
			"{} {} ({})",
			colored!("warning:", yellow),
			diagnostic.message(),
			make_relative(&diagnostic.file, &self.root)
		);
	}
}

fn run_init(args: &RefereeCli) -> Result<(), Box<dyn std::error::Error>> {
	let root = resolve_root(args);
	let config_path = root.join("referee.toml");

	if let Some(existing) = RefereeConfig::resolve_path(&root) {
		println!("Config file already exists: {}", existing.display());
		return Ok(());
	}

	let sample_config = "# referee configuration\n\n# Project directory to scan, relative to \
	                     this file.\nproject = \".\"\n\n# Abort instead of warning when a view \
	                     controller has no Storyboard ID.\nerror_on_missing_storyboard_ids = \
	                     false\n\n# Gitignore-style patterns excluded from scanning.\n# \
	                     [exclude]\n# patterns = [\"Pods/\", \"Carthage/\"]\n\n# Options passed \
	                     to the code generator.\n# [output]\n# directory = \"Generated\"\n# \
	                     class_prefix = \"\"\n# language = \"swift\"\n";

	std::fs::write(&config_path, sample_config)?;
	println!("Created referee.toml");
	println!();
	println!("Next steps:");
	println!("  1. Point `project` at the directory holding your storyboards");
	println!("  2. Run `referee list` to check which storyboards are found");
	println!("  3. Run `referee scan` to collect identifiers");

	Ok(())
}

fn run_list(args: &RefereeCli) -> Result<(), Box<dyn std::error::Error>> {
	let ctx = load_context(args)?;
	let storyboards: Vec<_> = ctx.manifest.storyboards().collect();

	if storyboards.is_empty() {
		println!("No storyboards found.");
		return Ok(());
	}

	println!("{}", colored!("Storyboards:", bold));
	for entry in storyboards {
		println!("  {}", make_relative(&entry.real_path, &ctx.root));
	}

	Ok(())
}

fn run_scan(args: &RefereeCli, format: OutputFormat) -> Result<(), Box<dyn std::error::Error>> {
	let ctx = load_context(args)?;

	match format {
		OutputFormat::Text => {
			let mut sink = ConsoleSink {
				root: ctx.root.clone(),
				warnings: 0,
			};
			let result = ctx.scan(&mut sink)?;

			if result.is_empty() {
				println!("No storyboards found.");
				return Ok(());
			}

			for group in &result {
				print_group(group, &ctx.root);
			}

			println!();
			let summary = format!(
				"Scanned {} storyboard(s) with {} warning(s).",
				result.len(),
				sink.warnings
			);
			println!("{}", colored!(summary, green));
		}
		OutputFormat::Json => {
			let mut sink = TracingSink;
			let result = ctx.scan(&mut sink)?;
			let output = serde_json::json!({
				"config": ctx.config.as_ref(),
				"storyboards": &result,
			});
			println!("{}", serde_json::to_string_pretty(&output)?);
		}
	}

	Ok(())
}

fn print_group(group: &ResourceGroup, root: &Path) {
	println!();
	println!(
		"{} {}",
		colored!(group.storyboard_name(), bold),
		make_relative(group.storyboard_path(), root)
	);

	if group.is_empty() {
		println!("  (no identifiers)");
		return;
	}

	if !group.view_controllers().is_empty() {
		println!("  View controllers:");
		for controller in group.view_controllers() {
			match &controller.class {
				Some(class) => println!("    {} ({class})", controller.identifier),
				None => println!("    {}", controller.identifier),
			}
		}
	}

	print_identifiers("Table cells", group.table_cells());
	print_identifiers("Collection cells", group.collection_cells());
	print_identifiers("Segues", group.segues());
}

fn print_identifiers(label: &str, identifiers: &[String]) {
	if identifiers.is_empty() {
		return;
	}

	println!("  {label}:");
	for identifier in identifiers {
		println!("    {identifier}");
	}
}
