//! Tests for the coordinate module

mod point_tests;
