//! Network URL constants for the WestWine client.

/// Default REST API base URL for the WestWine wine catalogue.
pub const DEFAULT_API_URL: &str = "https://westwine.herokuapp.com/wines/";
