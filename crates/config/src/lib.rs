#![deny(warnings)]

mod network;
mod scenario;

pub use network::Network;
pub use scenario::{Check, Scenario};
