//! Step definitions for the behavioural scenarios.

mod aggregate_steps;
mod config_steps;
mod listener_steps;
