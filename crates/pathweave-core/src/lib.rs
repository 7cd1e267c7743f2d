//! Pathweave Core Library
//!
//! Generic graph traversal and path-finding over caller-defined graphs.

pub mod config;
pub mod error;
pub mod graph;
pub mod logging;
