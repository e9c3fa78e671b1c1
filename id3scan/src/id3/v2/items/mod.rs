mod attached_picture_frame;
mod private_frame;

pub use attached_picture_frame::AttachedPictureFrame;
pub use private_frame::PrivateFrame;
