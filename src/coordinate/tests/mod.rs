//! Tests for the coordinate module

mod bounds_tests;
