pub(crate) mod b;
