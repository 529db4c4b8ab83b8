pub(crate) mod import;
pub(crate) mod png;
