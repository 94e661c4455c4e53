//! # Attendance Form Bot
//! 
//! A Telegram bot that lets registered users clock work sessions on and off
//! and records each finished session in a Google Form.
//! 
//! ## Features
//! - `/on`, `/off` and `/abort` timer commands
//! - Sessions keyed by Telegram username or numeric user id
//! - Form submission with configurable field ids
//! - Health endpoints for container orchestration

/// Bot command handlers and message processing
pub mod bot;
/// Configuration management and environment variables
pub mod config;
/// Domain error types
pub mod error;
/// Session store, form submission, user directory and health services
pub mod services;
/// Utility functions for datetime, validation, logging and replies
pub mod utils;
