//! Rating appearance configuration.

pub(crate) mod model;
