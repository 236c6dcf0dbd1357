//! stck command-line host.
//!
//! Works on a directory holding `index.html`, `style.css` and `script.js`:
//!
//! - `stck share <dir>` prints a link whose fragment carries all three files
//! - `stck open <link> <dir>` writes a shared link back out as files
//! - `stck preview <dir>` prints the standalone preview document

mod files;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use stck_config::PlaygroundConfig;
use stck_preview::PreviewRenderer;
use stck_share::{Location, UrlLocation, decode, encode_token};
use tracing::{debug, info};
use url::Url;

/// Share links and previews for html/css/js playground files.
#[derive(Parser, Debug)]
#[command(name = "stck")]
#[command(about = "Share links and previews for html/css/js playground files")]
struct Args {
	/// Configuration file (TOML)
	#[arg(short, long, value_name = "PATH", global = true)]
	config: Option<PathBuf>,

	/// Verbose logging
	#[arg(short, long, global = true)]
	verbose: bool,

	#[command(subcommand)]
	command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
	/// Print a share link for the documents in DIR
	Share {
		dir: PathBuf,
		/// Page the link points at
		#[arg(long, default_value = "https://stck.local/")]
		base: Url,
	},
	/// Write the documents carried by a share link (or bare token) into DIR
	Open { link: String, dir: PathBuf },
	/// Print the preview document for DIR
	Preview {
		dir: PathBuf,
		/// Print the data URI instead of the document
		#[arg(long)]
		uri: bool,
	},
}

fn main() -> Result<()> {
	let args = Args::parse();
	setup_tracing(args.verbose);

	let config = match &args.config {
		Some(path) => PlaygroundConfig::load(path)
			.with_context(|| format!("loading config {}", path.display()))?,
		None => PlaygroundConfig::default(),
	};

	match args.command {
		Command::Share { dir, base } => {
			let documents = files::read_dir(&dir, &config)?;
			let token = encode_token(&documents)?;
			let mut location = UrlLocation::new(base);
			location.set_fragment(token.as_str());
			println!("{}", location.url());
		}
		Command::Open { link, dir } => {
			let fragment = fragment_of(&link);
			let documents = decode(&fragment).context("link does not carry a valid document set")?;
			files::write_dir(&dir, &documents)?;
			info!(dir = %dir.display(), "stck.open.written");
		}
		Command::Preview { dir, uri } => {
			let documents = files::read_dir(&dir, &config)?;
			let resource = PreviewRenderer::new().render(&documents);
			if uri {
				println!("{}", resource.uri());
			} else {
				println!("{}", resource.document()?);
			}
		}
	}

	Ok(())
}

/// Extracts the share token from a full link, or takes `link` as the token.
fn fragment_of(link: &str) -> String {
	match Url::parse(link) {
		Ok(url) => {
			debug!(%url, "stck.open.link");
			url.fragment().unwrap_or_default().to_owned()
		}
		Err(_) => link.to_owned(),
	}
}

fn setup_tracing(verbose: bool) {
	use tracing_subscriber::EnvFilter;

	let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
		if verbose {
			EnvFilter::new("stck=debug,info")
		} else {
			EnvFilter::new("warn")
		}
	});

	tracing_subscriber::fmt()
		.with_env_filter(filter)
		.with_writer(std::io::stderr)
		.init();
}
