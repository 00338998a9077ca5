pub(crate) mod int;
