#![allow(dead_code)]

pub mod dns_server_mock;
pub mod wire;

pub use dns_server_mock::{MockBehavior, MockDnsServer};
