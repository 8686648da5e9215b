pub mod dev;
pub mod health;
pub mod send;
pub mod tools;
pub mod webhook;
