//! Application layer orchestrating submissions into outbound notifications.

pub mod services;
