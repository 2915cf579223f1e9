//! Domain logic modules
//!
//! Everything here operates on the datasets loaded once at startup; no
//! module mutates shared state after load.

pub mod dataset;
pub mod distribution;
pub mod explain;
pub mod profile;
pub mod scoring;
