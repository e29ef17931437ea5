//! LuaCATS annotation emission.
//!
//! Turns the API tree into one [`Unit`] of text per module. This module handles:
//! - Type rendering for parameters, returns and inline tables
//! - Function blocks with overloads for extra call variants
//! - Class and enum blocks
//! - Module assembly, parent before children

mod blocks;
mod config;
mod emitter;
mod render;
mod signature;


pub use config::{Config, DEFAULT_DOC_BASE_URL, DEFAULT_NAMESPACE};
pub use emitter::{Emitter, Unit};
pub use signature::{Owner, expand_arguments, order_variants};
