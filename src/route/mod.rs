pub(crate) mod bridge;
