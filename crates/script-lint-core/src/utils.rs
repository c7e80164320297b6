//! Utility functions for rule implementations and file discovery.

pub mod allowance;
pub mod paths;
pub mod tree;

#[doc(inline)]
pub use allowance::{check_allow, AllowCheck};
#[doc(inline)]
pub use paths::is_excluded;
#[doc(inline)]
pub use tree::{child_of_kind, walk};
