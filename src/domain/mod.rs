//! Domain layer: value objects, entities and the interfaces the delivery
//! core depends on.
//!
//! The usecase layer depends only on the traits defined here; the concrete
//! implementations live in the infrastructure layer (dependency inversion).

pub mod event;
pub mod message;
pub mod pusher;
pub mod registry;
pub mod store;

pub use event::DeliveryEvent;
pub use message::{
    ConversationSummary, DomainError, Message, MessageBody, MessageId, Timestamp, UserId,
};
pub use pusher::RoomPusher;
pub use registry::{ConnectionId, PusherChannel, RoomRegistry};
pub use store::{MessageStore, PeerActivity, StoreError};
