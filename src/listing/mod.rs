pub mod amount;
pub mod model;
pub mod registry;

pub use model::{Listing, ListingCard, ListingId, ListingStatus, RecentBid};
pub use registry::{ListingRegistry, SharedCard};
