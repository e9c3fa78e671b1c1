use crate::id3::v2::FrameId;

/// How a frame's payload is turned into a field
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) enum FrameKind {
	/// Recognized, recorded with an empty label and value
	Undecoded,
	/// The payload is a single encoded text string
	PlainText,
	/// APIC
	Picture,
	/// PRIV
	Private,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) struct FrameDescriptor {
	pub label: &'static str,
	pub kind: FrameKind,
}

macro_rules! descriptors {
	(@label $label:literal) => { $label };
	(@label) => { "" };
	($($id:literal => $kind:ident $(($label:literal))?),+ $(,)?) => {
		// Sorted by ID, see `tests::table_is_sorted`
		static DESCRIPTORS: &[([u8; 4], FrameDescriptor)] = &[
			$(
				(
					*$id,
					FrameDescriptor {
						label: descriptors!(@label $($label)?),
						kind: FrameKind::$kind,
					},
				),
			)+
		];
	};
}

descriptors! {
	b"AENC" => Undecoded,
	b"APIC" => Picture("Picture"),
	b"COMM" => Undecoded,
	b"COMR" => Undecoded,
	b"ENCR" => Undecoded,
	b"EQUA" => Undecoded,
	b"ETCO" => Undecoded,
	b"GEOB" => Undecoded,
	b"GRID" => Undecoded,
	b"IPLS" => Undecoded,
	b"LINK" => Undecoded,
	b"MCDI" => Undecoded,
	b"MLLT" => Undecoded,
	b"OWNE" => Undecoded,
	b"PCNT" => Undecoded,
	b"POPM" => Undecoded,
	b"POSS" => Undecoded,
	b"PRIV" => Private,
	b"RBUF" => Undecoded,
	b"RVAD" => Undecoded,
	b"RVRB" => Undecoded,
	b"SYLT" => Undecoded,
	b"SYTC" => Undecoded,
	b"TALB" => PlainText("Album"),
	b"TBPM" => PlainText("BPM"),
	b"TCOM" => PlainText("Composer"),
	b"TCON" => PlainText("Content type"),
	b"TCOP" => PlainText("Copyright"),
	b"TDAT" => PlainText("Date"),
	b"TDLY" => PlainText("Playlist delay"),
	b"TENC" => PlainText("Encoded by"),
	b"TEXT" => PlainText("Lyrics by"),
	b"TFLT" => PlainText("File type"),
	b"TIME" => PlainText("Time"),
	b"TIT1" => PlainText("Content group"),
	b"TIT2" => PlainText("Title"),
	b"TIT3" => PlainText("Subtitle"),
	b"TKEY" => PlainText("Initial key"),
	b"TLAN" => PlainText("Language(s)"),
	b"TLEN" => PlainText("Length"),
	b"TMED" => PlainText("Media type"),
	b"TOAL" => PlainText("Original album"),
	b"TOFN" => PlainText("Original filename"),
	b"TOLY" => PlainText("Original lyricist(s)"),
	b"TOPE" => PlainText("Original artist(s)"),
	b"TORY" => PlainText("Original release year"),
	b"TOWN" => PlainText("Owner"),
	b"TPE1" => PlainText("Artist(s)"),
	b"TPE2" => PlainText("Band"),
	b"TPE3" => PlainText("Conductor"),
	b"TPE4" => PlainText("Modified by"),
	b"TPOS" => PlainText("Part"),
	b"TPUB" => PlainText("Publisher"),
	b"TRCK" => PlainText("Track"),
	b"TRDA" => PlainText("Recorded on"),
	b"TRSN" => PlainText("Radio"),
	b"TRSO" => PlainText("Radio owner"),
	b"TSIZ" => PlainText("Size"),
	b"TSRC" => PlainText("ISRC"),
	b"TSSE" => PlainText("Encoding settings"),
	b"TXXX" => PlainText("User defined"),
	b"TYER" => PlainText("Year"),
	b"UFID" => Undecoded,
	b"USER" => Undecoded,
	b"USLT" => Undecoded,
	b"WCOM" => Undecoded,
	b"WCOP" => Undecoded,
	b"WOAF" => Undecoded,
	b"WOAR" => Undecoded,
	b"WOAS" => Undecoded,
	b"WORS" => Undecoded,
	b"WPAY" => Undecoded,
	b"WPUB" => Undecoded,
	b"WXXX" => Undecoded,
}

/// Find the descriptor for a frame ID, `None` if the frame is unknown
pub(crate) fn lookup(id: FrameId) -> Option<FrameDescriptor> {
	DESCRIPTORS
		.binary_search_by(|(key, _)| key.cmp(id.as_bytes()))
		.ok()
		.map(|index| DESCRIPTORS[index].1)
}
