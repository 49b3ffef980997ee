mod client;
mod error;
