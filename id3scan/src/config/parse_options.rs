/// Options to control how id3scan parses a tag block
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[non_exhaustive]
pub struct ParseOptions {
	pub(crate) verbosity: Verbosity,
	pub(crate) parsing_mode: ParsingMode,
}

impl Default for ParseOptions {
	/// The default implementation for `ParseOptions`
	///
	/// The defaults are as follows:
	///
	/// ```rust,ignore
	/// ParseOptions {
	/// 	verbosity: Verbosity::Silent,
	/// 	parsing_mode: ParsingMode::BestAttempt,
	/// }
	/// ```
	fn default() -> Self {
		Self::new()
	}
}

impl ParseOptions {
	/// Default diagnostics level
	pub const DEFAULT_VERBOSITY: Verbosity = Verbosity::Silent;

	/// Default parsing mode
	pub const DEFAULT_PARSING_MODE: ParsingMode = ParsingMode::BestAttempt;

	/// Creates a new `ParseOptions`, alias for `Default` implementation
	///
	/// See also: [`ParseOptions::default`]
	///
	/// # Examples
	///
	/// ```rust
	/// use id3scan::config::ParseOptions;
	///
	/// let parsing_options = ParseOptions::new();
	/// ```
	#[must_use]
	pub const fn new() -> Self {
		Self {
			verbosity: Self::DEFAULT_VERBOSITY,
			parsing_mode: Self::DEFAULT_PARSING_MODE,
		}
	}

	/// The diagnostics level, see [`Verbosity`] for details
	///
	/// # Examples
	///
	/// ```rust
	/// use id3scan::config::{ParseOptions, Verbosity};
	///
	/// // Log every decoded field
	/// let parsing_options = ParseOptions::new().verbosity(Verbosity::Fields);
	/// ```
	pub fn verbosity(&mut self, verbosity: Verbosity) -> Self {
		self.verbosity = verbosity;
		*self
	}

	/// The parsing mode to use, see [`ParsingMode`] for details
	///
	/// # Examples
	///
	/// ```rust
	/// use id3scan::config::{ParseOptions, ParsingMode};
	///
	/// // By default, `parsing_mode` is ParsingMode::BestAttempt. Here, we need absolute correctness.
	/// let parsing_options = ParseOptions::new().parsing_mode(ParsingMode::Strict);
	/// ```
	pub fn parsing_mode(&mut self, parsing_mode: ParsingMode) -> Self {
		self.parsing_mode = parsing_mode;
		*self
	}

	pub(crate) fn logs_fields(self) -> bool {
		self.verbosity >= Verbosity::Fields
	}

	pub(crate) fn logs_headers(self) -> bool {
		self.verbosity >= Verbosity::Headers
	}
}

/// How much the parser reports through the [`log`] facade
///
/// Nothing is printed directly, the diagnostics only show up if the caller installed a logger.
#[derive(Copy, Clone, Debug, Ord, PartialOrd, Eq, PartialEq, Default, Hash)]
pub enum Verbosity {
	/// No diagnostics at all
	#[default]
	Silent = 0,
	/// Every decoded field, the bitrate, and recoverable per-frame problems
	Fields = 1,
	/// Everything from [`Verbosity::Fields`], plus the tag, extended header, and frame headers
	Headers = 2,
}

impl Verbosity {
	/// Get a `Verbosity` from a numeric level
	///
	/// Anything above 2 is treated as [`Verbosity::Headers`].
	///
	/// # Examples
	///
	/// ```rust
	/// use id3scan::config::Verbosity;
	///
	/// assert_eq!(Verbosity::from_level(0), Verbosity::Silent);
	/// assert_eq!(Verbosity::from_level(1), Verbosity::Fields);
	/// assert_eq!(Verbosity::from_level(7), Verbosity::Headers);
	/// ```
	pub fn from_level(level: u8) -> Self {
		match level {
			0 => Self::Silent,
			1 => Self::Fields,
			_ => Self::Headers,
		}
	}

	/// The numeric level of this `Verbosity`
	pub fn level(self) -> u8 {
		self as u8
	}
}

impl From<u8> for Verbosity {
	fn from(level: u8) -> Self {
		Self::from_level(level)
	}
}

/// The parsing strictness mode
///
/// # Examples
///
/// ```rust,no_run
/// use id3scan::config::{ParseOptions, ParsingMode};
///
/// # fn main() -> id3scan::error::Result<()> {
/// // We only want to read well-formed tag blocks
/// let parsing_options = ParseOptions::new().parsing_mode(ParsingMode::Strict);
/// let track = id3scan::read_from_path("foo.mp3", parsing_options)?;
/// # Ok(()) }
/// ```
#[derive(Copy, Clone, Debug, Ord, PartialOrd, Eq, PartialEq, Default)]
#[non_exhaustive]
pub enum ParsingMode {
	/// Will eagerly error on invalid input
	///
	/// ## Examples of behavior
	///
	/// * A frame runs past the end of the tag block - The parser will error and the entire input is discarded
	/// * A picture frame is missing its terminator - The parser will error and the entire input is discarded
	Strict,
	/// Default mode, less eager to error on recoverably malformed input
	///
	/// ## Examples of behavior
	///
	/// * A frame runs past the end of the tag block - Frame reading stops, everything decoded so far is kept
	/// * A picture frame is missing its terminator - The field is recorded with an "Error" label and message
	#[default]
	BestAttempt,
	/// Least eager to error, may produce partial output
	///
	/// ## Examples of behavior
	///
	/// * A frame runs past the end of the tag block - Frame reading stops, everything decoded so far is kept
	/// * A picture frame is missing its terminator - The frame is discarded and the parser moves on
	Relaxed,
}
