mod relay;

pub use relay::*;
pub use tooniq_shared::contact::{Category, ContactResponse, ContactSubmission, Rejection};
