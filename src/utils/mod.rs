//! Utility functions and helpers

pub mod seeding;
