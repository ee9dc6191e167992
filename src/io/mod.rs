pub(crate) mod image_dir;
pub(crate) mod job;
