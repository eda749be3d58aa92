//! Command handlers

pub mod deps;
pub mod icon;
