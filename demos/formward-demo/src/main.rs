//! Formward demo
//!
//! Five tabs of forms showing what a submit handler can return and how
//! failures are handled.
//!
//! ## Usage
//!
//! ```bash
//! formward-demo tabs
//! formward-demo submit register -d name=John -d is_accept_terms=on
//! formward-demo --config formward.toml replay
//! ```

mod scenario;
mod tabs;

use anyhow::{Context, Result, anyhow};
use clap::{Parser, Subcommand};
use formward::forms::{LayoutItem, TabItem};
use formward::prelude::*;
use std::path::PathBuf;
use std::process;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "formward-demo")]
#[command(about = "Submit the Formward demo forms from the command line", long_about = None)]
#[command(version)]
struct Cli {
	#[command(subcommand)]
	command: Commands,

	/// Settings file (TOML); FORMWARD_* variables override it
	#[arg(short, long, value_name = "PATH", global = true)]
	config: Option<PathBuf>,

	/// Verbosity level (can be repeated)
	#[arg(short, long, action = clap::ArgAction::Count, global = true)]
	verbosity: u8,
}

#[derive(Subcommand)]
enum Commands {
	/// List the tabs and their forms
	Tabs,

	/// Submit one form and print the response as JSON
	Submit {
		/// Name of the form
		#[arg(value_name = "FORM")]
		form: String,

		/// Submitted value, repeatable
		#[arg(short = 'd', long = "data", value_name = "KEY=VALUE")]
		data: Vec<String>,
	},

	/// Run the built-in scenario against every demo form
	Replay,
}

fn main() {
	let cli = Cli::parse();
	init_tracing(cli.verbosity);

	if let Err(e) = run(cli) {
		eprintln!("Error: {:#}", e);
		process::exit(1);
	}
}

fn init_tracing(verbosity: u8) {
	let filter = match verbosity {
		0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
		1 => EnvFilter::new("info"),
		_ => EnvFilter::new("debug"),
	};
	tracing_subscriber::fmt()
		.with_env_filter(filter)
		.with_target(false)
		.with_writer(std::io::stderr)
		.init();
}

fn run(cli: Cli) -> Result<()> {
	let settings = SettingsBuilder::standard(cli.config.as_deref())
		.build()
		.context("failed to load settings")?;
	tracing::debug!(?settings, "settings loaded");
	let settings = Arc::new(settings);

	match cli.command {
		Commands::Tabs => run_tabs(),
		Commands::Submit { form, data } => run_submit(&settings, &form, &data),
		Commands::Replay => {
			let steps = scenario::replay(&RequestContext::new(settings))?;
			println!("{} steps passed", steps);
			Ok(())
		}
	}
}

fn run_tabs() -> Result<()> {
	let tabs = tabs::build()?;
	for tab in tabs.iter() {
		println!("{}", tab.title);
		for item in &tab.items {
			match item {
				TabItem::Header { title, .. } => println!("  # {}", title),
				TabItem::Form(endpoint) => {
					let form = endpoint.form();
					let controls: Vec<&str> = form.controls().map(|(name, _)| name).collect();
					let groups = form
						.layout()
						.iter()
						.filter(|item| matches!(item, LayoutItem::Group(_)))
						.count();
					println!(
						"  {} [{}] groups: {}, button: {}",
						form.name(),
						controls.join(", "),
						groups,
						form.button().caption
					);
				}
			}
		}
	}
	Ok(())
}

fn run_submit(settings: &Arc<Settings>, name: &str, data: &[String]) -> Result<()> {
	let mut post = PostData::new();
	for pair in data {
		let (key, value) =
			PostData::parse_pair(pair).ok_or_else(|| anyhow!("expected KEY=VALUE, got '{}'", pair))?;
		post.insert(key, value);
	}

	let mut tabs = tabs::build()?;
	let endpoint = tabs::find(&mut tabs, name).with_context(|| format!("no form named '{}'", name))?;

	let ctx = RequestContext::new(Arc::clone(settings));
	let response = endpoint.submit(&ctx, &post)?;
	println!("{}", serde_json::to_string_pretty(&response)?);
	Ok(())
}
