// Shorthand for return Err(Id3ScanError::from(Id3v2ErrorKind::Foo))
//
// Usage:
// - err!(Variant(args...))          -> return Err(Id3v2ErrorKind::Variant(args...).into())
// - err!(Variant { field, other: x }) -> return Err(Id3v2ErrorKind::Variant { .. }.into())
macro_rules! err {
	($variant:ident($($arg:expr),+ $(,)?)) => {
		return Err(crate::error::Id3ScanError::from(
			crate::error::Id3v2ErrorKind::$variant($($arg),+),
		))
	};
	($variant:ident { $($field:ident $(: $value:expr)?),+ $(,)? }) => {
		return Err(crate::error::Id3ScanError::from(
			crate::error::Id3v2ErrorKind::$variant { $($field $(: $value)?),+ },
		))
	};
}

// A macro for handling the different `ParsingMode`s
//
// NOTE: All fields are optional, if `STRICT` or `RELAXED` are missing, it will
// 		 fall through to `DEFAULT`.
//
// Usage:
//
// - parse_mode_choice!(
// 		ident_of_parsing_mode,
// 		STRICT: some_expr,
// 		RELAXED: some_expr,
// 		DEFAULT: some_expr,
// 	 )
macro_rules! parse_mode_choice {
	(
		$parse_mode:ident,
		$(STRICT: $strict_handler:expr,)?
		$(BESTATTEMPT: $best_attempt_handler:expr,)?
		$(RELAXED: $relaxed_handler:expr,)?
		DEFAULT: $default:expr
	) => {
		match $parse_mode {
			$(crate::config::ParsingMode::Strict => { $strict_handler },)?
			$(crate::config::ParsingMode::BestAttempt => { $best_attempt_handler },)?
			$(crate::config::ParsingMode::Relaxed => { $relaxed_handler },)?
			#[allow(unreachable_patterns)]
			_ => { $default }
		}
	};
}

pub(crate) use {err, parse_mode_choice};
