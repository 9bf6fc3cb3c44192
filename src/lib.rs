// src/lib.rs

//! SensCritique collection exporter.
//!
//! Crawls a user's comics and books collections on senscritique.com and
//! writes them as a Goodreads-compatible CSV file.

pub mod config;
pub mod error;
pub mod models;
pub mod pipeline;
pub mod services;
pub mod storage;
pub mod utils;
