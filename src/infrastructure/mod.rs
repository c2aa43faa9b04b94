//! Infrastructure layer: concrete implementations of the domain interfaces
//! plus the wire/HTTP data transfer objects.

pub mod dto;
pub mod pusher;
pub mod registry;
pub mod store;
