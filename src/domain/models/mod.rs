pub mod credential;
pub mod secret;
