//! BK4819 receive gain table generator
//!
//! Searches every LNAS/LNA/MIX/PGA combination and, for each point of an
//! evenly spaced attenuation curve, keeps the closest one. Ties go to the
//! setting that leaves the front end (LNAS, LNA) more open.

pub mod candidate;
pub mod select;
pub mod stages;
pub mod table;
pub mod target;

pub use candidate::{Candidate, RegisterError, RegisterValue};
pub use table::{GainEntry, GainTable};
