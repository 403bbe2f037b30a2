//! Embedded word lists
//!
//! `ANSWERS` holds the daily targets, `ALLOWED` every accepted guess.
//! Both are generated from `data/` by the build script.

include!(concat!(env!("OUT_DIR"), "/answers.rs"));
include!(concat!(env!("OUT_DIR"), "/allowed.rs"));
