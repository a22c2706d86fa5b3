// src/models/agendamento.rs

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::common::moeda;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum StatusAgendamento {
    Pendente,
    Confirmado,
    Cancelado,
    Realizado,
    Ausente,
}

// Referências embutidas no agendamento. São um recorte das entidades
// completas: apenas o que a API devolve dentro de cada agendamento.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClienteDto {
    pub id: i64,
    pub nome: String,
    pub email: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfissionalDto {
    pub id: i64,
    pub nome: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServicoDto {
    pub id: i64,
    pub nome: String,
    // Preço capturado no momento do agendamento; a API ora manda número,
    // ora string "R$ 45,00". Normalizado para Decimal na desserialização.
    #[serde(deserialize_with = "moeda::decimal_flexivel")]
    pub preco: Decimal,
    pub duracao_minutos: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AgendamentoResponse {
    pub id: i64,
    pub cliente: ClienteDto,
    pub profissional: ProfissionalDto,
    pub servicos: Vec<ServicoDto>,
    // Formato da API: yyyy-MM-ddTHH:mm:ss (horário local, sem fuso)
    pub horario: NaiveDateTime,
    pub status: StatusAgendamento,
}
