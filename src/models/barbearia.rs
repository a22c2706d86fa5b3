// src/models/barbearia.rs

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnderecoDto {
    pub rua: String,
    pub numero: String,
    pub bairro: String,
    pub cidade: String,
    pub estado: String,
    pub cep: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HorarioFuncionamentoDto {
    pub abertura: String,
    pub fechamento: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BarbeariaResponse {
    pub id: i64,
    pub nome: String,
    pub cnpj: String,
    pub telefone: String,
    pub email: String,
    pub endereco: EnderecoDto,
    pub horario_funcionamento: HorarioFuncionamentoDto,
}
