//! # Clients
//!
//! Type-safe wrappers that hide message passing behind domain methods.

pub mod parcel_client;

pub use parcel_client::{ParcelClient, RegistrationReceipt};
