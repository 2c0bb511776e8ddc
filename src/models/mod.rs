pub mod envelope;
pub mod error;
pub mod event;
pub mod message;

pub use envelope::{Envelope, RelayReply};
pub use error::RelayError;
pub use event::{API_URL_FIELD, ProxyEvent, RelayRequest};
pub use message::ConversationMessage;
