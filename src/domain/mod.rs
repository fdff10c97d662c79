//! Domain layer: services, models, and the pure calculators.

pub mod client_service;
pub mod commands;
pub mod export_service;
pub mod import;
pub mod import_service;
pub mod models;
pub mod plan_service;
pub mod reminder_service;
pub mod renewal;
pub mod statistics_service;

pub use client_service::ClientService;
pub use export_service::ExportService;
pub use import_service::ImportService;
pub use plan_service::PlanService;
pub use reminder_service::ReminderService;
pub use statistics_service::StatisticsService;
