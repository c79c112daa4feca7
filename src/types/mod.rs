//! Core type definitions using newtype patterns for type safety.
//!
//! Keeps adb transport addresses apart from device serials, which look
//! alike but identify different things.

mod transport_id;

pub use transport_id::{SerialMap, TransportId};
