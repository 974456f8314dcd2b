//! Command implementations for the power rankings CLI

pub mod common;
pub mod import;
pub mod ranking;
pub mod serve;
pub mod tiers;

pub use common::{open_session, to_index};
