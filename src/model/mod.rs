mod availability;
mod client;
mod types;

pub use availability::*;
pub use client::*;
pub use types::*;
