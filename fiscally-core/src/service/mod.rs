//! Business services

pub mod notification;

pub use notification::{EmailChangeNotice, NotificationService};
