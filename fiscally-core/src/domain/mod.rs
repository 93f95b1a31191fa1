//! Domain models for Fiscally Core

pub mod email;
pub mod notification;
pub mod profile;

pub use email::*;
pub use notification::*;
pub use profile::*;
