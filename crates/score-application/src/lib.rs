//! Application layer for Score Inteligente.
//!
//! Orchestrates the core domain: session lifecycle, reference-data loading,
//! the navigation controller and score reports. [`AppShell`] is the single
//! entry point front ends use.

pub mod loader;
pub mod navigation;
pub mod report_service;
pub mod session_usecase;
pub mod shell;

pub use loader::ReferenceLoader;
pub use navigation::NavigationController;
pub use report_service::ReportService;
pub use session_usecase::SessionUseCase;
pub use shell::AppShell;
