pub mod config;
pub mod discovery;
pub mod domain;
pub mod enquiry;
pub mod error;
pub mod gateway;
pub mod pages;
pub mod router;
pub mod service;
pub mod telemetry;
