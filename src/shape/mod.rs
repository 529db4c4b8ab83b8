pub(crate) mod coverage;
pub(crate) mod sdf;
