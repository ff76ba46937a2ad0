mod client;

pub use client::{Client, ClientWithUser};
