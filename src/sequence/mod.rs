pub(crate) mod frame;
#[allow(clippy::module_inception)]
pub(crate) mod sequence;
