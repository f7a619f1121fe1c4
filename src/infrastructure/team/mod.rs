//! Team service

mod service;

pub use service::TeamService;
