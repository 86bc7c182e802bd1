pub mod account;
pub mod display;
pub mod navigation;
pub mod transport;
