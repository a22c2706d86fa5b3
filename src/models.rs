pub mod agendamento;
pub mod barbearia;
pub mod cliente;
pub mod dashboard;
pub mod dashboard_profissional;
pub mod profissional;
pub mod servico;
