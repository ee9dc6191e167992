pub(crate) mod channels;
pub(crate) mod dimensions;
pub(crate) mod resample;
