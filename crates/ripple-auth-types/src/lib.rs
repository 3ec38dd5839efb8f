//! Auth types shared between the token issuer and its consumers.
//!
//! Provides JWT claims and access-token validation.

pub mod token;
