//! # WestWine Rust Client
//!
//! A small async client for the WestWine wine catalogue REST API.
//!
//! ## Modules
//!
//! - [`api`]: REST API client (fetch one wine, fetch all wines, add a wine)
//! - [`network`]: endpoint constants
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use westwine::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = WineClient::new()?;
//!
//!     let wines = client.fetch_wines().await?;
//!     println!("All wines: {}", wines);
//!
//!     let wine = client.fetch_wine_by_id(42).await?;
//!     println!("Wine 42: {}", wine);
//!
//!     Ok(())
//! }
//! ```

// ============================================================================
// MODULES
// ============================================================================

/// Network URL constants (API endpoint).
pub mod network;

/// REST API client module for wines.
#[cfg(feature = "http")]
pub mod api;

// ============================================================================
// PRELUDE
// ============================================================================

/// Prelude module for convenient imports.
///
/// ```rust,ignore
/// use westwine::prelude::*;
/// ```
pub mod prelude {
    #[cfg(feature = "http")]
    pub use crate::api::{
        ApiError, ApiResult, Wine, WineClient, WineClientBuilder, WineId, WineList,
    };

    pub use crate::network::DEFAULT_API_URL;
}
