// src/models/cliente.rs

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClienteResponse {
    pub id: i64,
    pub nome: String,
    pub cpf: String,
    pub telefone: String,
    pub email: String,
    pub data_nascimento: String,
}
