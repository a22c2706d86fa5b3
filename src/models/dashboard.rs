// src/models/dashboard.rs

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::agendamento::AgendamentoResponse;

// 1. Estatísticas gerais (os cards do topo)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub total_barbearias: u64,
    pub total_profissionais: u64,
    pub total_clientes: u64,
    pub total_agendamentos: u64,
    pub agendamentos_hoje: u64,
    pub agendamentos_semana: u64,
    pub faturamento_mes: Decimal,
    pub faturamento_ano: Decimal,
}

impl DashboardStats {
    pub fn vazio() -> Self {
        Self {
            total_barbearias: 0,
            total_profissionais: 0,
            total_clientes: 0,
            total_agendamentos: 0,
            agendamentos_hoje: 0,
            agendamentos_semana: 0,
            faturamento_mes: Decimal::ZERO,
            faturamento_ano: Decimal::ZERO,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum TipoAtividade {
    Agendamento,
    Cadastro,
    Cancelamento,
    Pagamento,
}

// 2. Atividades recentes do painel geral
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AtividadeRecente {
    pub id: i64,
    pub tipo: TipoAtividade,
    pub descricao: String,
    pub data: NaiveDateTime,
    pub usuario: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub valor: Option<Decimal>,
}

// 3. Um ponto de gráfico pronto para o front (label/valor/cor)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DadosGrafico {
    pub label: String,
    pub value: Decimal,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardData {
    pub stats: DashboardStats,
    pub atividades_recentes: Vec<AtividadeRecente>,
    pub agendamentos_proximos: Vec<AgendamentoResponse>,
    pub grafico_agendamentos: Vec<DadosGrafico>,
}

impl DashboardData {
    /// Snapshot padrão usado quando alguma leitura do gateway falha:
    /// o painel renderiza zerado em vez de receber um erro.
    pub fn vazio() -> Self {
        Self {
            stats: DashboardStats::vazio(),
            atividades_recentes: Vec::new(),
            agendamentos_proximos: Vec::new(),
            grafico_agendamentos: Vec::new(),
        }
    }
}
