#![forbid(unsafe_code)]

pub mod auth;
pub mod model;
pub mod time;

pub use time::Clock;
