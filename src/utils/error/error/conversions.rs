//! Type conversions for GatewayError

use super::types::GatewayError;
use crate::core::providers::ProviderError;

impl From<ProviderError> for GatewayError {
    fn from(err: ProviderError) -> Self {
        GatewayError::Provider(err)
    }
}
