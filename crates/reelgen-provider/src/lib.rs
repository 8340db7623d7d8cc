//! Reelgen Provider Library
//!
//! Abstraction over the external video-generation service. The
//! [`VideoProvider`] trait is the seam the orchestrator calls through;
//! [`MockProvider`] models a synchronously succeeding service and
//! [`RemoteProvider`] is the real network client. Providers are selected by
//! configuration through [`create_provider`].

pub mod factory;
pub mod mock;
pub mod remote;
pub mod traits;

// Re-export commonly used types
pub use factory::create_provider;
pub use mock::MockProvider;
pub use remote::RemoteProvider;
pub use traits::{ProviderError, ProviderResult, VideoProvider};
