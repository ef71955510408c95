#![forbid(unsafe_code)]

mod kind;
mod typed;

pub use kind::*;
pub use typed::*;
