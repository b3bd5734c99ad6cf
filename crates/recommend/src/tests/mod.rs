//! Unit tests for the recommendation engine

mod profile_test;
