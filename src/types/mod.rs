//! Shared type definitions
//!
//! This module contains the data types shared between the core and the UI.

pub mod notification;
pub mod quote;

pub use notification::{Notification, NotificationKind};
pub use quote::{is_reserved_category, seed_quotes, FilterSelection, Quote};
