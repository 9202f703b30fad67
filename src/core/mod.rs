//! Core domain logic for repath
//!
//! This module contains pure logic with no I/O dependencies.
//!
//! ## Architecture
//!
//! - `models/` - Domain types (Token, Key, Options, `PathSpec`, Params)
//! - `services/` - Tokenizing, compiling and building
//!
//! Data flows one way: source → tokens → {regex, builder}.

pub mod models;
pub mod services;
