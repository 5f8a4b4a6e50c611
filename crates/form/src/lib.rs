//! Client side of the contact pipeline: draft ownership, validation and the
//! submission lifecycle, independent of how the request is carried.

mod controller;
mod error;
mod payload;
mod transport;

pub use controller::*;
pub use error::SubmitError;
pub use payload::SubmitPayload;
pub use transport::*;
pub use tooniq_shared::contact::{ContactSubmission, Field, Rejection};
