pub mod dto;
pub mod keys;
pub mod services;
pub mod validation;

pub use dto::{HeaderInfo, NotificationPrefs, UserProfile};
