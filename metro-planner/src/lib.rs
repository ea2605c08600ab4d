//! Metro route planner.
//!
//! Loads a metro network (lines, stations and walkable transfers) and
//! answers: "how do I get from this station to that one with as few
//! changes as possible, and roughly how long will it take?"

pub mod cli;
pub mod config;
pub mod domain;
pub mod network;
pub mod planner;
