pub(crate) mod color;
pub(crate) mod model;
pub(crate) mod modes;
pub(crate) mod resolve;
