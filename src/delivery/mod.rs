//! Delivery module for sending contact messages through EmailJS

mod client;
mod error;
mod traits;

pub use client::{EmailJsClient, TemplateParams};
pub use error::DeliveryError;
pub use traits::DeliveryClientTrait;

#[cfg(test)]
pub use traits::MockDeliveryClientTrait;
