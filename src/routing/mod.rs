//! Routing subsystem.
//!
//! # Data Flow
//! ```text
//! Navigation request (path from link, program or address bar)
//!     → matcher.rs (normalize path)
//!     → table.rs (ordered lookup)
//!     → Return: ResolvedRoute or NotFound
//!
//! Table Construction (at startup):
//!     RouteDescriptor[]
//!     → Validate names and paths
//!     → Index by name
//!     → Freeze as immutable RouteTable
//! ```
//!
//! # Design Decisions
//! - Routes built at startup, immutable at runtime
//! - Exact, case-sensitive path matching
//! - Deterministic: same input always resolves to the same route
//! - First match wins (insertion order)
//! - Explicit NotFound, no catch-all route

pub mod descriptor;
pub mod matcher;
pub mod table;

pub use descriptor::{ResolvedRoute, RouteDescriptor};
pub use matcher::normalize_path;
pub use table::RouteTable;
