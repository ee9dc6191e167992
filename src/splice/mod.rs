pub(crate) mod compose;
pub(crate) mod counts;
pub(crate) mod pipeline;
pub(crate) mod supply;
