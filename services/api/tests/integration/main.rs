mod auth_test;
mod helpers;
mod verification_test;
