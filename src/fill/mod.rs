pub(crate) mod gradient;
pub(crate) mod lift;
pub(crate) mod vignette;
