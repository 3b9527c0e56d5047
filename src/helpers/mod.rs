//! Display helper functions

pub mod date;
