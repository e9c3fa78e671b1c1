// Bitrates in kbps, indexed by [MPEG-1 bit][layer - 1][bitrate index]
//
// The outer index is the low version bit, so MPEG-2 and MPEG-2.5 share a row. The layer rows are
// in on-disk order: 0b01 is Layer III, 0b10 is Layer II, and 0b11 is Layer I.
pub(crate) const BITRATES: [[[u32; 16]; 3]; 2] = [
	// MPEG-2, MPEG-2.5
	[
		[0, 8, 16, 24, 32, 40, 48, 56, 64, 80, 96, 112, 128, 144, 160, 0], // Layer III
		[0, 8, 16, 24, 32, 40, 48, 56, 64, 80, 96, 112, 128, 144, 160, 0], // Layer II
		[0, 32, 48, 56, 64, 80, 96, 112, 128, 144, 160, 176, 192, 224, 256, 0], // Layer I
	],
	// MPEG-1
	[
		[0, 32, 40, 48, 56, 64, 80, 96, 112, 128, 160, 192, 224, 256, 320, 0], // Layer III
		[0, 32, 48, 56, 64, 80, 96, 112, 128, 160, 192, 224, 256, 320, 384, 0], // Layer II
		[0, 32, 64, 96, 128, 160, 192, 224, 256, 288, 320, 352, 384, 416, 448, 0], // Layer I
	],
];
