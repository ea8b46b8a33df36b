pub mod blacklist;
pub mod error;
pub mod hashing;
pub mod interfaces;
pub mod service;
pub mod token;
