//! Endpoint groups, one per device API resource family.
//! Each group borrows the shared [`HttpClient`](crate::http::HttpClient)
//! and maps its methods onto a fixed path, method and response schema.

pub mod gps;
pub mod messages;
pub mod session;
pub mod unauthorized;

pub use gps::{GpsEndpoint, GpsPositionEndpoint};
pub use messages::MessagesEndpoint;
pub use session::SessionEndpoint;
pub use unauthorized::UnauthorizedEndpoint;
