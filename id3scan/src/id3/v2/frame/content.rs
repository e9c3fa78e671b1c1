use super::descriptor::{FrameDescriptor, FrameKind};
use crate::error::Result;
use crate::id3::v2::items::{AttachedPictureFrame, PrivateFrame};
use crate::id3::v2::DecodedField;
use crate::util::text::decode_text;

/// Turn a frame payload into a field, according to its descriptor
///
/// NOTE: This expects *only* the frame content, any extra fields must already be skipped
pub(in crate::id3::v2) fn parse_content(
	descriptor: FrameDescriptor,
	content: &[u8],
) -> Result<DecodedField> {
	Ok(match descriptor.kind {
		FrameKind::Undecoded => DecodedField::default(),
		FrameKind::PlainText => DecodedField::new(descriptor.label, decode_text(content)),
		FrameKind::Picture => {
			let picture = AttachedPictureFrame::parse(content)?;
			DecodedField::new(AttachedPictureFrame::LABEL, picture.to_string())
		},
		FrameKind::Private => {
			let private = PrivateFrame::parse(content)?;
			let value = private.to_string();
			DecodedField::new(private.owner, value)
		},
	})
}
