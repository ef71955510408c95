#![forbid(unsafe_code)]

pub mod brackets;
pub mod fees;
pub mod ids;
pub mod model;
pub mod status;
