// Adapters for the two job boards. Each owns its schema, query fixtures and
// quirks; everything above sees only the JobSource port.

pub mod hh;
pub mod sj;

/// Listings requested per page from both boards.
pub const PAGE_SIZE: u64 = 100;

pub use hh::HeadHunter;
pub use sj::SuperJob;
