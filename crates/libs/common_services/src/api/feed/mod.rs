pub mod error;
pub mod interfaces;
pub mod pagination;
pub mod service;
