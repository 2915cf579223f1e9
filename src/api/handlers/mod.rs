//! HTTP handlers

pub mod clients;
pub mod distribution;
pub mod explain;
pub mod health;
pub mod scoring;
