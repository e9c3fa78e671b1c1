#![allow(missing_docs)]

use id3scan::config::{ParseOptions, Verbosity};
use id3scan::naming::DEGENERATE_FILE_NAME;
use id3scan::read_from_path;

use structopt::StructOpt;
use walkdir::WalkDir;

use std::path::{Path, PathBuf};
use std::time::UNIX_EPOCH;

#[derive(Debug, StructOpt)]
#[structopt(name = "mp3list", about = "List the canonical names of every MP3 file in a tree")]
struct Opt {
	/// Verbosity level (0 = none, 1 = fields, 2 = headers)
	#[structopt(short, default_value = "0")]
	v: u8,

	#[structopt(parse(from_os_str))]
	source: PathBuf,
}

fn is_mp3(path: &Path) -> bool {
	path.extension().is_some_and(|ext| ext == "mp3")
}

fn main() {
	let opt = Opt::from_args();

	let verbosity = Verbosity::from_level(opt.v);
	let default_filter = if verbosity == Verbosity::Silent { "warn" } else { "info" };
	env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
		.init();

	let parse_options = ParseOptions::new().verbosity(verbosity);

	let mut mp3_files = 0;
	for entry in WalkDir::new(&opt.source) {
		let entry = match entry {
			Ok(entry) => entry,
			Err(e) => {
				log::error!("{e}");
				continue;
			},
		};

		let path = entry.path();
		if verbosity >= Verbosity::Fields {
			println!("{}", path.display());
		}

		if !entry.file_type().is_file() || !is_mp3(path) {
			continue;
		}

		mp3_files += 1;

		let track = match read_from_path(path, parse_options) {
			Ok(track) => track,
			Err(e) => {
				eprintln!("ERROR: {}: {e}", path.display());
				continue;
			},
		};

		let mut name = track.file_name();
		if name == DEGENERATE_FILE_NAME {
			name = entry.file_name().to_string_lossy().into_owned();
		}

		let (mtime, size) = match entry.metadata() {
			Ok(metadata) => {
				let mtime = metadata
					.modified()
					.ok()
					.and_then(|time| time.duration_since(UNIX_EPOCH).ok())
					.map_or(0, |since_epoch| since_epoch.as_secs());
				(mtime, metadata.len())
			},
			Err(_) => (0, 0),
		};

		println!(">>> {name}");
		println!("<<< {}", path.display());
		println!(">>> {} kbps - {mtime} - {size} bytes\n", track.bitrate());
	}

	println!("\n{mp3_files} MP3 files");
}
