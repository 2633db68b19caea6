//! Scan source strategies.
//!
//! Only the filesystem strategy (`fs` module) exists today, feeding the
//! concrete `scan()`/`scan_with()` API. A source trait can be introduced
//! when a second concrete strategy demands it — until then, the design stays
//! concrete to avoid speculative abstraction.

pub mod fs;
