//! Helpers shared by the in-module test suites.
