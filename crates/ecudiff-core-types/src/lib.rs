//! Core types shared across ecudiff facilities
//!
//! This crate holds the canonical schema constants used by both the error
//! and logging facilities: structured field keys and event names.

pub mod schema;
