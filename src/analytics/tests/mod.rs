//! Unit tests for the analytics context.

mod fixtures;
