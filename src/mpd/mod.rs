//! MPD module: re-exports and module declarations for submodules.

pub mod client;
mod connection;

pub use client::MpdClient;
