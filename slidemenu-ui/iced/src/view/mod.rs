pub(crate) mod overlay;
pub(crate) mod panel;
pub(crate) mod trigger;
