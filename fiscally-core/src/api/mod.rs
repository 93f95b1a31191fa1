//! REST API handlers

pub mod health;
pub mod me;
pub mod metrics;
pub mod notifications;
pub mod pages;
pub mod profile;
