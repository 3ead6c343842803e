//! HTTP transport for the remote analysis service (feature `http-client`).

pub mod client;

pub use client::HttpAnalysisClient;
