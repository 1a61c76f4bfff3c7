#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![cfg_attr(feature = "fail-on-warnings", deny(clippy::all))]

mod client;
mod error;
mod primitives;

pub use client::*;
pub use error::*;
pub use primitives::*;
