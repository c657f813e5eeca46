// src/specs/mod.rs
//! # Page specs
//!
//! Where the ground truth lives on the remote site and how to pull it out.
//! Specs know URLs, element ids and JSON key paths. They do no caching, no
//! persistence and no cleaning: those live in `store`, `scrape` and `clean`.
//!
//! ```text
//! scrape::crawl → specs::game_charts::{game_urls, fetch_document, extract_actions}
//!              ↘ store::save_game
//! ```
//!
//! Specs are testable offline against inline HTML fixtures.
pub mod game_charts;
