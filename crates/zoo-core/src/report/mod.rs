//! Status reports for enclosures.

mod status;

pub use status::*;
