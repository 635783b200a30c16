pub mod control;
pub mod controller;
pub mod error;
pub mod model;
pub mod transport;

pub use controller::BidController;
pub use error::{BidError, TransportError};
pub use model::{BidReceipt, BidRequest, BidResponse, Key};
pub use transport::{BidTransport, HttpBidTransport};
