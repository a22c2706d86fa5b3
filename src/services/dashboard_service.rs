// src/services/dashboard_service.rs

use chrono::NaiveDateTime;

use crate::{
    common::error::AppError,
    gateway::ApiGateway,
    models::{
        agendamento::{AgendamentoResponse, StatusAgendamento},
        dashboard::{AtividadeRecente, DashboardData, DashboardStats, TipoAtividade},
    },
    services::agregacao,
};

/// Dashboard geral: estatísticas de toda a operação.
#[derive(Clone)]
pub struct DashboardService {
    gateway: ApiGateway,
}

impl DashboardService {
    pub fn new(gateway: ApiGateway) -> Self {
        Self { gateway }
    }

    /// Carrega o snapshot do dashboard geral.
    ///
    /// Se qualquer leitura do gateway falhar, o painel degrada para o
    /// snapshot vazio: o front sempre recebe dados bem formados, nunca
    /// um erro. O erro original fica no log.
    pub async fn carregar_dashboard(&self, agora: NaiveDateTime) -> DashboardData {
        match self.montar_dashboard(agora).await {
            Ok(data) => data,
            Err(erro) => {
                tracing::error!("Erro ao carregar dados do dashboard: {}", erro);
                DashboardData::vazio()
            }
        }
    }

    /// Snapshot apenas com o bloco de estatísticas.
    pub async fn carregar_stats(&self, agora: NaiveDateTime) -> DashboardStats {
        self.carregar_dashboard(agora).await.stats
    }

    async fn montar_dashboard(&self, agora: NaiveDateTime) -> Result<DashboardData, AppError> {
        // Ponto de junção: as quatro leituras correm em paralelo e a
        // agregação só começa com todas concluídas. Resultado parcial
        // nunca é aproveitado.
        let (agendamentos, profissionais, clientes, barbearias) = tokio::try_join!(
            self.gateway.listar_agendamentos(),
            self.gateway.listar_profissionais(),
            self.gateway.listar_clientes(),
            self.gateway.listar_barbearias(),
        )?;

        let particao = agregacao::particionar_por_periodo(&agendamentos, agora);

        let stats = DashboardStats {
            total_barbearias: barbearias.len() as u64,
            total_profissionais: profissionais.len() as u64,
            total_clientes: clientes.len() as u64,
            total_agendamentos: agendamentos.len() as u64,
            agendamentos_hoje: particao.hoje.len() as u64,
            agendamentos_semana: particao.semana.len() as u64,
            faturamento_mes: agregacao::somar_faturamento(&particao.mes),
            faturamento_ano: agregacao::somar_faturamento(&particao.ano),
        };

        let grafico_agendamentos = agregacao::grafico_agendamentos(&particao);

        let mut recentes = agendamentos.clone();
        recentes.sort_by(|a, b| b.horario.cmp(&a.horario));
        recentes.truncate(agregacao::LIMITE_LISTAGEM);
        let atividades_recentes = recentes.iter().map(atividade_de_agendamento).collect();

        let mut agendamentos_proximos: Vec<AgendamentoResponse> = agendamentos
            .iter()
            .filter(|a| a.horario > agora)
            .cloned()
            .collect();
        agendamentos_proximos.sort_by_key(|a| a.horario);
        agendamentos_proximos.truncate(agregacao::LIMITE_LISTAGEM);

        Ok(DashboardData {
            stats,
            atividades_recentes,
            agendamentos_proximos,
            grafico_agendamentos,
        })
    }
}

// O feed de atividades é derivado dos agendamentos mais recentes: o
// status decide o tipo e a descrição; o cliente é o ator.
fn atividade_de_agendamento(agendamento: &AgendamentoResponse) -> AtividadeRecente {
    let (tipo, descricao, valor) = match agendamento.status {
        StatusAgendamento::Cancelado => (TipoAtividade::Cancelamento, "Agendamento cancelado", None),
        StatusAgendamento::Realizado => (
            TipoAtividade::Pagamento,
            "Pagamento realizado",
            Some(agregacao::valor_total(agendamento)),
        ),
        _ => (
            TipoAtividade::Agendamento,
            "Novo agendamento criado",
            Some(agregacao::valor_total(agendamento)),
        ),
    };

    AtividadeRecente {
        id: agendamento.id,
        tipo,
        descricao: descricao.to_string(),
        data: agendamento.horario,
        usuario: agendamento.cliente.nome.clone(),
        valor,
    }
}
