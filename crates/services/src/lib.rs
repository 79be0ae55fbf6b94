#![forbid(unsafe_code)]

pub mod app_services;
pub mod dashboard_service;
pub mod error;
pub mod problem_service;

pub use tracker_core::Clock;

pub use app_services::AppServices;
pub use dashboard_service::DashboardService;
pub use error::{DashboardServiceError, ProblemServiceError};
pub use problem_service::ProblemService;
