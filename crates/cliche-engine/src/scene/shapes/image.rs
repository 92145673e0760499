use crate::coords::Vec2;
use crate::image::ImageId;
use crate::scene::{DrawCmd, DrawList, ZIndex};

/// Image blit payload. The pixels live in an [`ImageStore`](crate::image::ImageStore)
/// and are already scaled to `size`.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageCmd {
    pub image: ImageId,
    /// Top-left of the blit in logical pixels.
    pub origin: Vec2,
    pub size: Vec2,
}

impl DrawList {
    /// Records an image blit.
    #[inline]
    pub fn push_image(&mut self, z: ZIndex, image: ImageId, origin: Vec2, size: Vec2) {
        self.push(z, DrawCmd::Image(ImageCmd { image, origin, size }));
    }
}
