pub mod form;
pub mod health;
pub mod session_store;
pub mod timezone;
pub mod users;
