//! Flight path server.
//!
//! A web service that answers: "given these unordered flight segments,
//! where does the whole trip start and end?"

pub mod config;
pub mod domain;
pub mod reduce;
pub mod web;
