#![allow(missing_docs)]

use id3scan::config::{ParseOptions, Verbosity};
use id3scan::naming::DEGENERATE_FILE_NAME;
use id3scan::read_from_path;

use structopt::StructOpt;
use walkdir::{DirEntry, WalkDir};

use std::fs::{self, File};
use std::io;
use std::path::{Path, PathBuf};
use std::time::UNIX_EPOCH;

#[derive(Debug, StructOpt)]
#[structopt(
	name = "mp3copy",
	about = "Copy every MP3 file in a tree to a location built from its tags"
)]
struct Opt {
	/// Move the files, deleting each source once it is copied
	#[structopt(short)]
	m: bool,

	/// Verbosity level (0 = none, 1 = fields, 2 = headers)
	#[structopt(short, default_value = "0")]
	v: u8,

	#[structopt(parse(from_os_str))]
	source: PathBuf,

	/// Where to copy the files, if missing the destinations are only listed
	#[structopt(parse(from_os_str))]
	destination: Option<PathBuf>,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum FileKind {
	Mp3,
	// Counted in the summary, never copied
	Wma,
	Other,
}

fn file_kind(path: &Path) -> FileKind {
	match path.extension().and_then(|ext| ext.to_str()) {
		Some("mp3") => FileKind::Mp3,
		Some("wma") => FileKind::Wma,
		_ => FileKind::Other,
	}
}

fn summary(mp3_files: usize, wma_files: usize) -> String {
	format!("{mp3_files} MP3 files ({wma_files} WMA files)")
}

// Copy `source` to `destination`, keeping its permissions and modification time
fn copy_file(source: &Path, destination: &Path) -> io::Result<()> {
	if let Some(parent) = destination.parent() {
		fs::create_dir_all(parent)?;
	}

	fs::copy(source, destination)?;

	let modified = fs::metadata(source)?.modified()?;
	File::options()
		.write(true)
		.open(destination)?
		.set_modified(modified)
}

fn process(entry: &DirEntry, opt: &Opt, parse_options: ParseOptions) -> io::Result<()> {
	let path = entry.path();

	let track = match read_from_path(path, parse_options) {
		Ok(track) => track,
		Err(e) => {
			eprintln!("ERROR: {}: {e}", path.display());
			return Ok(());
		},
	};

	// Files without usable tags end up in the root of the destination
	let mut name = track.file_name();
	if name == DEGENERATE_FILE_NAME {
		name = entry.file_name().to_string_lossy().into_owned();
	}

	let metadata = entry.metadata()?;
	let mtime = metadata
		.modified()
		.ok()
		.and_then(|time| time.duration_since(UNIX_EPOCH).ok())
		.map_or(0, |since_epoch| since_epoch.as_secs());

	println!("<<< {}", path.display());
	println!(">>> {name}");
	println!(
		">>> {} kbps - {mtime} - {} bytes\n",
		track.bitrate(),
		metadata.len()
	);

	let Some(destination_root) = &opt.destination else {
		return Ok(());
	};

	let destination = destination_root.join(&name);
	copy_file(path, &destination)?;

	if opt.m {
		fs::remove_file(path)?;
	}

	Ok(())
}

fn main() {
	let opt = Opt::from_args();

	let verbosity = Verbosity::from_level(opt.v);
	let default_filter = if verbosity == Verbosity::Silent { "warn" } else { "info" };
	env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
		.init();

	let parse_options = ParseOptions::new().verbosity(verbosity);

	println!(
		"move = {}, src = {}, dst = {}",
		opt.m,
		opt.source.display(),
		opt.destination
			.as_deref()
			.map_or_else(String::new, |dst| dst.display().to_string())
	);

	let mut mp3_files = 0;
	let mut wma_files = 0;
	for entry in WalkDir::new(&opt.source) {
		let entry = match entry {
			Ok(entry) => entry,
			Err(e) => {
				log::error!("{e}");
				continue;
			},
		};

		if verbosity >= Verbosity::Fields {
			println!("{}", entry.path().display());
		}

		if !entry.file_type().is_file() {
			continue;
		}

		match file_kind(entry.path()) {
			FileKind::Mp3 => mp3_files += 1,
			FileKind::Wma => {
				wma_files += 1;
				continue;
			},
			FileKind::Other => continue,
		}

		if let Err(e) = process(&entry, &opt, parse_options) {
			eprintln!("ERROR: {}: {e}", entry.path().display());
			std::process::exit(1);
		}
	}

	println!("\n{}", summary(mp3_files, wma_files));
}
