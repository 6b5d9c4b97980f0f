//! REST API client module for WestWine.
//!
//! This module provides an async HTTP client for the WestWine wine
//! catalogue: read one wine, read all wines, create a wine.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use westwine::api::WineClient;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Create client for the public endpoint
//!     let client = WineClient::new()?;
//!
//!     // Get all wines
//!     let wines = client.fetch_wines().await?;
//!     println!("Wines: {}", wines);
//!
//!     // Get a specific wine
//!     let wine = client.fetch_wine_by_id("5f1a9c0e").await?;
//!     println!("Wine: {}", wine["name"]);
//!
//!     Ok(())
//! }
//! ```
//!
//! # Client Configuration
//!
//! Use the builder pattern for a different server or extra headers:
//!
//! ```rust,ignore
//! use westwine::api::WineClient;
//!
//! let client = WineClient::builder()
//!     .base_url("http://localhost:3000/wines")
//!     .header("X-Custom-Header", "value")
//!     .build()?;
//! ```
//!
//! # Error Handling
//!
//! All methods return `ApiResult<T>` which is an alias for `Result<T, ApiError>`.
//! HTTP statuses are not errors; only transport and JSON failures are:
//!
//! ```rust,ignore
//! use westwine::api::{ApiError, WineClient};
//!
//! match client.fetch_wine_by_id(42).await {
//!     Ok(wine) => println!("Got {}", wine),
//!     Err(ApiError::Http(e)) => println!("Network failure: {}", e),
//!     Err(e) => println!("Other error: {}", e),
//! }
//! ```
//!
//! # Creating Wines
//!
//! `add_wine` returns the raw [`reqwest::Response`]; reading the status or
//! body is up to the caller:
//!
//! ```rust,ignore
//! use serde_json::json;
//!
//! let response = client.add_wine(&json!({ "name": "Shiraz", "year": 2018 })).await?;
//! if !response.status().is_success() {
//!     println!("Server rejected wine: {}", response.text().await?);
//! }
//! ```

pub mod client;
pub mod error;
pub mod types;

// Re-export main types for convenience
pub use client::{WineClient, WineClientBuilder};
pub use error::{ApiError, ApiResult};
pub use types::*;
