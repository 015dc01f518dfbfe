//! Per-group feature extractors. Each is a set of pure, total functions
//! over the optional-typed context; absences resolve to the schema
//! defaults, never to an error.

pub mod composite;
pub mod device;
pub mod history;
pub mod temporal;
