// src/constants.rs
//! Domain constants that define the operational boundaries of the client.
//!
//! Each constant is named for the Canvas concept it constrains, not its
//! technical role.

// ---------------------------------------------------------------------------
// Canvas API boundaries
// ---------------------------------------------------------------------------

/// Path segment every resource path is mounted under.
pub const API_BASE_SEGMENT: &str = "api/v1";

/// Query parameter Canvas reads the page size from.
pub const PER_PAGE_PARAM: &str = "per_page";

/// How many objects Canvas returns per page of a collection.
///
/// Canvas caps `per_page` at 100. Every GET asks for the maximum so that
/// pagination has as few round-trips as possible.
pub const CANVAS_PAGE_SIZE: i64 = 100;

/// Maximum number of follow-up pages fetched for one GET.
///
/// A circuit breaker for `Link` headers that never stop pointing at a next
/// page. With 100 items per page this allows 2 100 items per listing.
pub const MAX_FOLLOWED_PAGES: usize = 20;

// ---------------------------------------------------------------------------
// Transport defaults
// ---------------------------------------------------------------------------

/// Request timeout applied by the HTTP transport unless configured.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Environment variable holding the Canvas access token.
pub const TOKEN_ENV_VAR: &str = "CANVAS_API_TOKEN";

/// Environment variable holding the Canvas instance URL.
pub const BASE_URL_ENV_VAR: &str = "CANVAS_BASE_URL";

// ---------------------------------------------------------------------------
// Error display
// ---------------------------------------------------------------------------

/// Maximum characters shown when previewing unparseable response bodies.
pub const ERROR_BODY_PREVIEW_LENGTH: usize = 200;
