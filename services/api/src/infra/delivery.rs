use crate::domain::repository::CodeDelivery;

/// Writes verification codes to the service log instead of dispatching them.
///
/// Known weakness, kept on purpose: no email/SMS channel exists in scope, and
/// the code also travels back in the API response. Replacing this type with a
/// real dispatcher is the intended single point of change.
#[derive(Clone)]
pub struct InsecureCodeDelivery;

impl CodeDelivery for InsecureCodeDelivery {
    fn deliver(&self, email: &str, code: &str) {
        tracing::info!(email, code, "verification code issued");
    }
}
