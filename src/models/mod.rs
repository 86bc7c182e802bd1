pub mod event;
pub mod health;
pub mod payload;
pub mod route;
