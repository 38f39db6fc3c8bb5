//! Session-backed models for the till.

pub mod session;

pub use session::keys as session_keys;
pub use session::{clear_customer, load_customer, save_customer};
