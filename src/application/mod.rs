/// Client facade over the session and services
pub mod client;
/// Application configuration module
pub mod config;
/// Service interfaces
pub mod interfaces;
/// Service implementations
pub mod services;
