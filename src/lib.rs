pub mod bidding;
pub mod clock;
pub mod config;
pub mod listing;
pub mod notification;
pub mod page;
pub mod scheduler;
