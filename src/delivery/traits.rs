//! Trait abstraction for the delivery client to enable mocking in tests

use super::client::TemplateParams;
use super::error::DeliveryError;
use async_trait::async_trait;

/// Outbound email delivery, one call per submitted message
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DeliveryClientTrait: Send + Sync {
    /// Send the message described by `params`
    async fn send(&self, params: &TemplateParams) -> Result<(), DeliveryError>;
}
