//! Classroom Service Library Crate
//!
//! This library drives a timed teaching session from the terminal: it reads
//! the teacher's speech as text lines, lets the simulated class respond,
//! reports events to a presenter and persists the rewards earned. The
//! `classroom` binary is a thin wrapper around this library.

pub mod config;
pub mod presenter;
pub mod session;
pub mod store;
