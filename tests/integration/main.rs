//! Integration tests

mod config_test;
mod driver_test;
mod generator_test;
