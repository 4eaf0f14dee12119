//! Domain layer - business logic and services

pub mod correction;
pub mod hierarchy;
pub mod repository;
pub mod service;

pub use repository::{Repository, TransactionManager};
pub use service::Service;
