// src/common/error.rs

use reqwest::StatusCode;
use thiserror::Error;

// Nosso tipo de erro, com `thiserror` para melhor ergonomia.
// As mensagens são as mesmas que o front exibia ao usuário, centralizadas aqui.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Não foi possível conectar ao servidor")]
    FalhaDeConexao(#[source] reqwest::Error),

    #[error("Não autorizado. Faça login novamente.")]
    NaoAutorizado,

    #[error("Acesso negado")]
    AcessoNegado,

    #[error("Recurso não encontrado")]
    RecursoNaoEncontrado,

    #[error("Dados inválidos")]
    DadosInvalidos,

    #[error("Erro interno do servidor")]
    ErroDoServidor(StatusCode),

    // O corpo chegou, mas não era o JSON que esperávamos
    #[error("Resposta inválida do servidor")]
    PayloadInvalido(#[source] reqwest::Error),

    // Variante genérica para qualquer outro erro inesperado
    // `anyhow::Error` é ótimo para capturar o contexto do erro.
    #[error("Ocorreu um erro inesperado")]
    Interno(#[from] anyhow::Error),
}

impl AppError {
    /// Converte um status HTTP de falha na variante correspondente.
    pub fn de_status(status: StatusCode) -> Self {
        match status {
            StatusCode::UNAUTHORIZED => AppError::NaoAutorizado,
            StatusCode::FORBIDDEN => AppError::AcessoNegado,
            StatusCode::NOT_FOUND => AppError::RecursoNaoEncontrado,
            StatusCode::UNPROCESSABLE_ENTITY => AppError::DadosInvalidos,
            outro => AppError::ErroDoServidor(outro),
        }
    }
}

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            AppError::PayloadInvalido(err)
        } else {
            AppError::FalhaDeConexao(err)
        }
    }
}
