#![forbid(unsafe_code)]

mod params;
mod protocol;

pub(crate) use params::*;
pub(crate) use protocol::*;
