mod contact;
mod server;

pub use contact::{SendArgs, send};
pub use server::serve;
