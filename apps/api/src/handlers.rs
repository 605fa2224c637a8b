pub mod catalog;
pub mod health;
pub mod roles;
pub mod views;
