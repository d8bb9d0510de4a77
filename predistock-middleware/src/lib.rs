#![doc = include_str!("../README.md")]
//! predistock-middleware
//!
//! Gateway wrappers and the builder that composes them.
#![warn(missing_docs)]

mod builder;
mod cache;

pub use crate::builder::GatewayBuilder;
pub use crate::cache::{CacheMiddleware, CachingGateway};
