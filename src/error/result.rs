//! Result alias for storefront operations.

use super::storefront_error::StorefrontError;

/// Type alias for Results using [`StorefrontError`].
pub type StorefrontResult<T> = Result<T, StorefrontError>;
