//! Domain model for mastery-round practice: items, notes, settings, and
//! session summaries.

pub mod error;
pub mod model;
pub mod time;

pub use error::Error;
pub use time::Clock;
