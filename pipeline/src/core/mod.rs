//! Core pipeline logic

pub mod index;
pub mod runner;
pub mod tasks;
