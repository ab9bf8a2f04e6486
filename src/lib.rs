//! connector-invoke: function invocation helper for event-driven connectors
//!
//! A library for turning an inbound message plus environment-derived
//! configuration into a retried HTTP POST against a function endpoint,
//! and for resolving cloud access settings from the environment.

pub mod config;
pub mod env;
pub mod invoke;
