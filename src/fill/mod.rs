//! Rating to per-star fill levels.

pub(crate) mod correct;
pub(crate) mod level;
pub(crate) mod mode;
