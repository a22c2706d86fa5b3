pub mod agregacao;
pub mod dashboard_profissional_service;
pub mod dashboard_service;

pub use dashboard_profissional_service::DashboardProfissionalService;
pub use dashboard_service::DashboardService;
