// src/config.rs

use std::{env, time::Duration};

use crate::{
    gateway::ApiGateway,
    services::{DashboardProfissionalService, DashboardService},
};

#[derive(Clone)]
pub struct AppState {
    pub gateway: ApiGateway,
    pub dashboard_service: DashboardService,
    pub dashboard_profissional_service: DashboardProfissionalService,
}

impl AppState {
    pub fn new() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        let api_url =
            env::var("API_URL").unwrap_or_else(|_| "http://localhost:8080".to_string());
        let api_token = env::var("API_TOKEN").ok();
        let timeout_segundos: u64 = env::var("HTTP_TIMEOUT_SEGUNDOS")
            .ok()
            .and_then(|valor| valor.parse().ok())
            .unwrap_or(30);

        // Sem timeout o painel ficaria em "carregando" para sempre caso
        // o gateway nunca respondesse.
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeout_segundos))
            .build()?;

        tracing::info!("✅ Gateway de dados configurado em {}", api_url);

        // --- Monta o gráfico de dependências ---
        let gateway = ApiGateway::new(http, api_url, api_token);
        let dashboard_service = DashboardService::new(gateway.clone());
        let dashboard_profissional_service = DashboardProfissionalService::new(gateway.clone());

        Ok(Self {
            gateway,
            dashboard_service,
            dashboard_profissional_service,
        })
    }
}
