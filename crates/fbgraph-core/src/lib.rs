//! Core types and trait definitions for the Facebook Graph API client.
//!
//! This crate is deliberately free of HTTP dependencies. It owns the domain
//! model, the JSON decoders that map Graph API responses onto it, and the
//! [`Transport`](transport::Transport) trait that concrete HTTP backends
//! implement.

pub mod common;
pub mod decode;
pub mod error;
pub mod event;
pub mod group;
pub mod media;
pub mod page;
pub mod post;
pub mod profile;
pub mod transport;

pub use error::{Error, Result};
