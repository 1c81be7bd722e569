mod client;
mod error;
mod types;

pub use client::{Client, OPENROUTER_URL};
pub use error::Error;
pub use types::*;
