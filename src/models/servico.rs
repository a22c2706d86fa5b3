// src/models/servico.rs

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::common::moeda;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServicoResponse {
    pub id: i64,
    pub nome: String,
    pub descricao: String,
    #[serde(deserialize_with = "moeda::decimal_flexivel")]
    pub preco: Decimal,
    pub duracao_minutos: i32,
    pub barbearia_id: i64,
}
