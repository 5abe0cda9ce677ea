//! Descriptive statistics over a filtered trip table.
//!
//! Each submodule computes one report: popular travel times, popular
//! stations and trips, trip duration totals, and rider demographics.
//! Reports are independent of one another and read-only over the table;
//! any of them can be computed alone or in any order.

pub mod durations;
pub mod frequency;
pub mod stations;
pub mod times;
pub mod users;
