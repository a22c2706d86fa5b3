// src/services/dashboard_profissional_service.rs

use chrono::NaiveDateTime;
use rust_decimal::Decimal;

use crate::{
    common::error::AppError,
    gateway::ApiGateway,
    models::{
        agendamento::AgendamentoResponse,
        dashboard::DadosGrafico,
        dashboard_profissional::{
            ClienteFrequente, DashboardProfissionalData, EstatisticasProfissional,
            GraficosProfissional, ServicoRanqueado,
        },
    },
    services::agregacao::{self, MedidaRanking},
};

/// Dashboard individual de um profissional.
#[derive(Clone)]
pub struct DashboardProfissionalService {
    gateway: ApiGateway,
}

impl DashboardProfissionalService {
    pub fn new(gateway: ApiGateway) -> Self {
        Self { gateway }
    }

    /// Carrega o snapshot completo do dashboard do profissional.
    ///
    /// Mesma política do dashboard geral: qualquer falha de leitura
    /// degrada para o snapshot vazio e o erro vai para o log.
    pub async fn carregar_dashboard(
        &self,
        profissional_id: i64,
        agora: NaiveDateTime,
    ) -> DashboardProfissionalData {
        match self.montar_dashboard(profissional_id, agora).await {
            Ok(data) => data,
            Err(erro) => {
                tracing::error!(
                    "Erro ao carregar dados do dashboard profissional: {}",
                    erro
                );
                DashboardProfissionalData::vazio()
            }
        }
    }

    /// Apenas o bloco de estatísticas do profissional.
    pub async fn carregar_estatisticas(
        &self,
        profissional_id: i64,
        agora: NaiveDateTime,
    ) -> EstatisticasProfissional {
        self.carregar_dashboard(profissional_id, agora)
            .await
            .estatisticas
    }

    async fn montar_dashboard(
        &self,
        profissional_id: i64,
        agora: NaiveDateTime,
    ) -> Result<DashboardProfissionalData, AppError> {
        // Junção: profissional e agenda em paralelo, agregação só depois
        // de ambos. O gateway não filtra por profissional, então o
        // recorte da coleção acontece aqui.
        let (profissional, todos) = tokio::try_join!(
            self.gateway.buscar_profissional(profissional_id),
            self.gateway.listar_agendamentos(),
        )?;

        let agendamentos: Vec<AgendamentoResponse> = todos
            .into_iter()
            .filter(|a| a.profissional.id == profissional_id)
            .collect();

        let particao = agregacao::particionar_por_periodo(&agendamentos, agora);

        let estatisticas = EstatisticasProfissional {
            total_agendamentos: agendamentos.len() as u64,
            agendamentos_mes: particao.mes.len() as u64,
            agendamentos_semana: particao.semana.len() as u64,
            agendamentos_hoje: particao.hoje.len() as u64,
            faturamento_mes: agregacao::somar_faturamento(&particao.mes),
            faturamento_ano: agregacao::somar_faturamento(&particao.ano),
            faturamento_hoje: agregacao::somar_faturamento(&particao.hoje),
            avaliacao_media: agregacao::AVALIACAO_MEDIA_PADRAO,
            total_avaliacoes: agregacao::TOTAL_AVALIACOES_PADRAO,
            taxa_ocupacao: agregacao::TAXA_OCUPACAO_PADRAO,
            clientes_atendidos: agregacao::clientes_distintos(&agendamentos),
            servicos_realizados: agregacao::servicos_realizados(&agendamentos),
        };

        let agenda_hoje: Vec<AgendamentoResponse> =
            particao.hoje.iter().map(|a| (*a).clone()).collect();

        let referencias: Vec<&AgendamentoResponse> = agendamentos.iter().collect();

        let servicos_mais_realizados: Vec<ServicoRanqueado> = agregacao::ranquear(
            &referencias,
            MedidaRanking::Quantidade,
            agregacao::LIMITE_RANKING,
            |a| {
                a.servicos
                    .iter()
                    .map(|s| (s.id, s.clone(), s.preco))
                    .collect::<Vec<_>>()
            },
        )
        .into_iter()
        .map(|grupo| ServicoRanqueado {
            servico: grupo.entidade,
            quantidade: grupo.quantidade,
            faturamento: grupo.faturamento,
        })
        .collect();

        let clientes_frequentes: Vec<ClienteFrequente> = agregacao::ranquear(
            &referencias,
            MedidaRanking::Quantidade,
            agregacao::LIMITE_RANKING,
            |a| vec![(a.cliente.id, a.cliente.clone(), agregacao::valor_total(a))],
        )
        .into_iter()
        .map(|grupo| ClienteFrequente {
            cliente: grupo.entidade,
            total_agendamentos: grupo.quantidade,
            ultima_visita: grupo.ultima_visita,
        })
        .collect();

        let graficos = GraficosProfissional {
            agendamentos_por_periodo: agregacao::grafico_agendamentos(&particao),
            faturamento_por_periodo: agregacao::grafico_faturamento(&particao),
            servicos_por_tipo: servicos_mais_realizados
                .iter()
                .map(|s| DadosGrafico {
                    label: s.servico.nome.clone(),
                    value: Decimal::from(s.quantidade),
                    color: Some(agregacao::COR_GRAFICO_SERVICOS.to_string()),
                })
                .collect(),
            avaliacoes_por_periodo: Vec::new(),
        };

        let mut proximos_agendamentos: Vec<AgendamentoResponse> = agendamentos
            .iter()
            .filter(|a| a.horario > agora)
            .cloned()
            .collect();
        proximos_agendamentos.sort_by_key(|a| a.horario);
        proximos_agendamentos.truncate(agregacao::LIMITE_LISTAGEM);

        let mut agendamentos_recentes = agendamentos.clone();
        agendamentos_recentes.sort_by(|a, b| b.horario.cmp(&a.horario));
        agendamentos_recentes.truncate(agregacao::LIMITE_LISTAGEM);

        Ok(DashboardProfissionalData {
            profissional: Some(profissional),
            agenda_hoje,
            proximos_agendamentos,
            agendamentos_recentes,
            estatisticas,
            graficos,
            clientes_frequentes,
            servicos_mais_realizados,
        })
    }
}
