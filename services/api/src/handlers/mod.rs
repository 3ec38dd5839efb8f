pub mod auth;
pub mod post;

use serde::Serialize;

/// Plain success-message body shared by several endpoints.
#[derive(Serialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: &str) -> Self {
        Self {
            message: message.to_owned(),
        }
    }
}
