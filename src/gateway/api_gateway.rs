// src/gateway/api_gateway.rs

use reqwest::Client;
use serde::de::DeserializeOwned;

use crate::{
    common::error::AppError,
    models::{
        agendamento::AgendamentoResponse, barbearia::BarbeariaResponse, cliente::ClienteResponse,
        profissional::ProfissionalResponse, servico::ServicoResponse,
    },
};

/// Adaptador do gateway de dados HTTP.
///
/// As leituras devolvem coleções inteiras: não assumimos que o backend
/// filtre ou pagine de forma confiável, então qualquer recorte acontece
/// do nosso lado, em memória.
#[derive(Clone)]
pub struct ApiGateway {
    http: Client,
    base_url: String,
    token: Option<String>,
}

impl ApiGateway {
    pub fn new(http: Client, base_url: impl Into<String>, token: Option<String>) -> Self {
        Self {
            http,
            base_url: base_url.into(),
            token,
        }
    }

    // GET genérico: anexa o bearer token quando existe e traduz
    // status de falha nas variantes de AppError.
    async fn buscar<T: DeserializeOwned>(&self, caminho: &str) -> Result<T, AppError> {
        let url = format!("{}/{}", self.base_url.trim_end_matches('/'), caminho);

        let mut requisicao = self.http.get(&url);
        if let Some(token) = &self.token {
            requisicao = requisicao.bearer_auth(token);
        }

        let resposta = requisicao.send().await?;

        let status = resposta.status();
        if !status.is_success() {
            tracing::error!("Erro na requisição GET /{}: status {}", caminho, status);
            return Err(AppError::de_status(status));
        }

        Ok(resposta.json::<T>().await?)
    }

    pub async fn listar_agendamentos(&self) -> Result<Vec<AgendamentoResponse>, AppError> {
        self.buscar("agendamentos").await
    }

    pub async fn listar_profissionais(&self) -> Result<Vec<ProfissionalResponse>, AppError> {
        self.buscar("profissionais").await
    }

    pub async fn listar_clientes(&self) -> Result<Vec<ClienteResponse>, AppError> {
        self.buscar("clientes").await
    }

    pub async fn listar_barbearias(&self) -> Result<Vec<BarbeariaResponse>, AppError> {
        self.buscar("barbearias").await
    }

    pub async fn listar_servicos(&self) -> Result<Vec<ServicoResponse>, AppError> {
        self.buscar("servicos").await
    }

    pub async fn buscar_profissional(&self, id: i64) -> Result<ProfissionalResponse, AppError> {
        self.buscar(&format!("profissionais/{id}")).await
    }
}
