//! Data models for the archive
//!
//! Each sub-module covers one concern; everything is re-exported here.

mod category;
mod classification;
mod record;
mod user;

pub use category::*;
pub use classification::*;
pub use record::*;
pub use user::*;
