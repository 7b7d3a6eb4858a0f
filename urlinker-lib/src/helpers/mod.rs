pub(crate) mod escape;
