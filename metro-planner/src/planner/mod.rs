//! Route planner.
//!
//! This module answers: "how do I get from this station to that one, and
//! roughly how long will it take?" Routes with fewer transfers always win;
//! see [`RouteCalculator`] for the search order.

mod calculator;
mod config;
mod route;


pub use calculator::{RouteCalculator, RouteError};
pub use config::DurationConfig;
pub use route::Route;
