//! Domain layer: value objects of the reservation engine and the capability
//! ports its orchestration depends on.

pub mod atm;
pub mod cash;
pub mod ports;
pub mod reservation;
