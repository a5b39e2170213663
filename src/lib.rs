pub mod types;
pub mod error;
pub mod client;

pub use client::Client;

#[cfg(test)]
mod tests;
