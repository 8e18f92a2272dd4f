//! Application-wide constants
//!
//! This module contains all constant values used throughout the application.
//! Constants are grouped by their purpose for better organization.

// =============================================================================
// SERVER DEFAULTS
// =============================================================================

/// Default server host address
pub const DEFAULT_SERVER_HOST: &str = "0.0.0.0";

/// Default server port
pub const DEFAULT_SERVER_PORT: u16 = 8080;

// =============================================================================
// DATABASE DEFAULTS
// =============================================================================

/// Default MongoDB connection string
pub const DEFAULT_MONGODB_URL: &str = "mongodb://localhost:27017";

/// Default logical database holding the problem bank
pub const DEFAULT_DATABASE_NAME: &str = "oj_rs";

/// Collection of problem documents
pub const PROBLEMS_COLLECTION: &str = "problems";

/// Collection holding the singleton pid counter document
pub const COUNTER_COLLECTION: &str = "pro_id";

// =============================================================================
// LEGACY STATUS CODES
// =============================================================================

// The upstream judge components expect these exact codes on the wire, even
// though 430/599 are outside the IANA registry.

/// Returned when a fetched pid does not exist
pub const LEGACY_NOT_FOUND: u16 = 430;

/// Returned for any server-side failure
pub const LEGACY_SERVER_ERROR: u16 = 599;
