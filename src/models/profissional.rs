// src/models/profissional.rs

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Especialidade {
    CorteMasculino,
    CorteFeminino,
    Barba,
    Coloracao,
    Sobrancelha,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfissionalResponse {
    pub id: i64,
    pub nome: String,
    pub cpf: String,
    pub telefone: String,
    pub email: String,
    pub especialidades: Vec<Especialidade>,
    pub barbearia_id: i64,
}
