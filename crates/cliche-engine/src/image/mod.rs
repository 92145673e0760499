//! Image loading and scaling.
//!
//! Decoding and resampling are delegated to the `image` crate. Results are
//! kept in an [`ImageStore`] and referenced from draw commands by
//! [`ImageId`].

mod store;

pub use ::image::RgbaImage;
pub use store::{ImageId, ImageLoadError, ImageStore};
