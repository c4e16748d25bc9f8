//! Provider integrations
//!
//! One module per external provider. Each module exposes its concrete
//! [`crate::provider::ProviderIntegration`] implementation plus the
//! provider's model-name constants.

pub mod moonshot;
