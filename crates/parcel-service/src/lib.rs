//! # Parcel Service Library
//!
//! Parcel lifecycle engine and its HTTP surface, exposed as a library for integration testing.

pub mod api;
pub mod clients;
pub mod config;
pub mod lifecycle;
pub mod model;
pub mod parcel_actor;
pub mod routing;
