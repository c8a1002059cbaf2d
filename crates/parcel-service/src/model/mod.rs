//! # Domain Model
//!
//! Pure data: parcels, their events and the routes they follow. Nothing here mutates a
//! parcel after construction; every transition lives in [`crate::parcel_actor`].

pub mod event;
pub mod parcel;
pub mod route;

pub use event::*;
pub use parcel::*;
pub use route::*;
