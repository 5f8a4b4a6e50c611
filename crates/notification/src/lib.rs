pub mod contact;
mod mock;
mod service;
pub(crate) mod template;

pub use contact::{ContactEmail, accepts_reply_to};
pub use mock::MockSender;
pub use service::*;
