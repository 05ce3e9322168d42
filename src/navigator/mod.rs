//! Navigation controller.
//!
//! # Data Flow
//! ```text
//! build_router(base_href, descriptors)
//!     → Base::parse (deployment prefix)
//!     → RouteTable::new (duplicate checks, frozen)
//!     → Navigator { table, history, mount state }
//!
//! Navigation (push / replace / go / start):
//!     path → normalize → RouteTable::resolve
//!         → NotFound: returned to the host, nothing changes
//!         → Matched: history entry written, previous view unmounted,
//!                    new view mounted, watch channel updated
//! ```
//!
//! # Design Decisions
//! - The mounted route is owned by the Navigator, not a global
//! - Resolution is pure; only navigation has side effects
//! - Single-threaded: navigation takes `&mut self`, readers use `subscribe()`

pub mod builder;
pub mod controller;
pub mod mount;

pub use builder::build_router;
pub use controller::Navigator;
pub use mount::MountState;
