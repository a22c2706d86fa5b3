// src/models/dashboard_profissional.rs

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::{
    agendamento::{AgendamentoResponse, ClienteDto, ServicoDto},
    dashboard::DadosGrafico,
    profissional::ProfissionalResponse,
};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EstatisticasProfissional {
    pub total_agendamentos: u64,
    pub agendamentos_mes: u64,
    pub agendamentos_semana: u64,
    pub agendamentos_hoje: u64,
    pub faturamento_mes: Decimal,
    pub faturamento_ano: Decimal,
    pub faturamento_hoje: Decimal,
    // Campos placeholder: ainda não existe sistema de avaliações nem
    // cálculo de ocupação. Valores fixos em services::agregacao.
    pub avaliacao_media: f64,
    pub total_avaliacoes: u64,
    pub taxa_ocupacao: f64,
    pub clientes_atendidos: u64,
    pub servicos_realizados: u64,
}

impl EstatisticasProfissional {
    pub fn vazio() -> Self {
        Self {
            total_agendamentos: 0,
            agendamentos_mes: 0,
            agendamentos_semana: 0,
            agendamentos_hoje: 0,
            faturamento_mes: Decimal::ZERO,
            faturamento_ano: Decimal::ZERO,
            faturamento_hoje: Decimal::ZERO,
            avaliacao_media: 0.0,
            total_avaliacoes: 0,
            taxa_ocupacao: 0.0,
            clientes_atendidos: 0,
            servicos_realizados: 0,
        }
    }
}

// Cliente que mais agenda com o profissional, com a última visita
// mantida por comparação corrente durante a acumulação.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClienteFrequente {
    pub cliente: ClienteDto,
    pub total_agendamentos: u64,
    pub ultima_visita: NaiveDateTime,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServicoRanqueado {
    pub servico: ServicoDto,
    pub quantidade: u64,
    pub faturamento: Decimal,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GraficosProfissional {
    pub agendamentos_por_periodo: Vec<DadosGrafico>,
    pub faturamento_por_periodo: Vec<DadosGrafico>,
    pub servicos_por_tipo: Vec<DadosGrafico>,
    // Vazio até existir sistema de avaliações
    pub avaliacoes_por_periodo: Vec<DadosGrafico>,
}

impl GraficosProfissional {
    pub fn vazio() -> Self {
        Self {
            agendamentos_por_periodo: Vec::new(),
            faturamento_por_periodo: Vec::new(),
            servicos_por_tipo: Vec::new(),
            avaliacoes_por_periodo: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardProfissionalData {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profissional: Option<ProfissionalResponse>,
    pub agenda_hoje: Vec<AgendamentoResponse>,
    pub proximos_agendamentos: Vec<AgendamentoResponse>,
    pub agendamentos_recentes: Vec<AgendamentoResponse>,
    pub estatisticas: EstatisticasProfissional,
    pub graficos: GraficosProfissional,
    pub clientes_frequentes: Vec<ClienteFrequente>,
    pub servicos_mais_realizados: Vec<ServicoRanqueado>,
}

impl DashboardProfissionalData {
    /// Snapshot padrão usado quando alguma leitura do gateway falha.
    pub fn vazio() -> Self {
        Self {
            profissional: None,
            agenda_hoje: Vec::new(),
            proximos_agendamentos: Vec::new(),
            agendamentos_recentes: Vec::new(),
            estatisticas: EstatisticasProfissional::vazio(),
            graficos: GraficosProfissional::vazio(),
            clientes_frequentes: Vec::new(),
            servicos_mais_realizados: Vec::new(),
        }
    }
}
