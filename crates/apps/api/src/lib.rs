#![deny(clippy::unwrap_used)]
#![allow(
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::cast_sign_loss,
    clippy::cast_possible_truncation
)]

pub mod api_state;
mod routes;
mod server;

pub use routes::*;
pub use server::*;
