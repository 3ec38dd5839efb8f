//! sea-orm entities for the Ripple API service.

pub mod likes;
pub mod posts;
pub mod users;
