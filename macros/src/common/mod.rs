// Common utilities for the derive
//
// This module contains:
// - layer_model: the forwarding layers, their supertraits and field bounds
// - parse_utils: `#[via(...)]` attribute parsing

mod layer_model;
mod parse_utils;

pub use layer_model::*;
pub use parse_utils::*;
