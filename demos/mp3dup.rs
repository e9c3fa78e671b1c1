#![allow(missing_docs)]

use id3scan::config::{ParseOptions, Verbosity};
use id3scan::naming::DEGENERATE_FILE_NAME;
use id3scan::read_from_path;

use structopt::StructOpt;
use walkdir::WalkDir;

use std::collections::HashMap;
use std::path::PathBuf;
use std::time::UNIX_EPOCH;

#[derive(Debug, StructOpt)]
#[structopt(
	name = "mp3dup",
	about = "Find MP3 files whose tags produce the same canonical name"
)]
struct Opt {
	/// Verbosity level (0 = none, 1 = fields, 2 = headers)
	#[structopt(short, default_value = "0")]
	v: u8,

	#[structopt(parse(from_os_str))]
	source: PathBuf,
}

struct FileInfo {
	path: PathBuf,
	mtime: u64,
	size: u64,
	bitrate: u32,
}

impl FileInfo {
	fn print(&self, index: usize) {
		println!("{index}: {}", self.path.display());
		println!(
			"   {} kbps - {} - {} bytes",
			self.bitrate, self.mtime, self.size
		);
	}
}

fn main() {
	let opt = Opt::from_args();

	let verbosity = Verbosity::from_level(opt.v);
	let default_filter = if verbosity == Verbosity::Silent { "warn" } else { "info" };
	env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
		.init();

	let parse_options = ParseOptions::new().verbosity(verbosity);

	// Every file seen so far, keyed by canonical name
	let mut seen: HashMap<String, Vec<FileInfo>> = HashMap::new();

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

		if !entry.file_type().is_file() || path.extension().is_none_or(|ext| ext != "mp3") {
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

		let metadata = entry.metadata().ok();
		let info = FileInfo {
			path: path.to_path_buf(),
			mtime: metadata
				.as_ref()
				.and_then(|metadata| metadata.modified().ok())
				.and_then(|time| time.duration_since(UNIX_EPOCH).ok())
				.map_or(0, |since_epoch| since_epoch.as_secs()),
			size: metadata.map_or(0, |metadata| metadata.len()),
			bitrate: track.bitrate(),
		};

		let duplicates = seen.entry(name.clone()).or_default();
		for earlier in duplicates.iter() {
			println!("{name}");
			info.print(1);
			earlier.print(2);
			println!();
		}

		duplicates.push(info);
	}

	println!("\n{mp3_files} MP3 files");
}
