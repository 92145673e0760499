pub(crate) mod image;
pub(crate) mod rect;
pub(crate) mod text;
