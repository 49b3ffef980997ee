mod client;
mod screens;
mod session;
