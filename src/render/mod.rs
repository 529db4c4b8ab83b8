pub(crate) mod compositor;
pub(crate) mod grid;
pub(crate) mod pipeline;
