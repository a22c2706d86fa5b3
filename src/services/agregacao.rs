// src/services/agregacao.rs

use std::collections::{HashMap, HashSet};

use chrono::{Datelike, Days, NaiveDate, NaiveDateTime, NaiveTime};
use rust_decimal::Decimal;

use crate::models::{agendamento::AgendamentoResponse, dashboard::DadosGrafico};

// Estatísticas placeholder: ainda não existe sistema de avaliações nem
// cálculo de disponibilidade. Ficam expostas como constantes nomeadas
// até serem ligadas a uma fonte de dados real.
pub const AVALIACAO_MEDIA_PADRAO: f64 = 4.5;
pub const TOTAL_AVALIACOES_PADRAO: u64 = 0;
pub const TAXA_OCUPACAO_PADRAO: f64 = 85.0;

// Gráficos por período: quatro janelas fixas, paleta fixa por índice
pub const PERIODOS_GRAFICO: [&str; 4] = ["Hoje", "Esta Semana", "Este Mês", "Este Ano"];
pub const CORES_GRAFICO: [&str; 4] = ["#FF6384", "#36A2EB", "#FFCE56", "#4BC0C0"];
pub const COR_GRAFICO_SERVICOS: &str = "#FF6384";

pub const LIMITE_RANKING: usize = 5;
pub const LIMITE_LISTAGEM: usize = 10;

// =========================================================================
//  1. JANELAS DE TEMPO
// =========================================================================

/// Os agendamentos repartidos nas quatro janelas do dashboard.
///
/// Cada janela é calculada de forma independente sobre a coleção inteira
/// (quatro varreduras; o volume de dados não justifica nada mais esperto).
pub struct ParticaoPeriodos<'a> {
    pub hoje: Vec<&'a AgendamentoResponse>,
    pub semana: Vec<&'a AgendamentoResponse>,
    pub mes: Vec<&'a AgendamentoResponse>,
    pub ano: Vec<&'a AgendamentoResponse>,
}

/// Início da semana corrente: domingo à meia-noite local.
pub fn inicio_da_semana(agora: NaiveDateTime) -> NaiveDateTime {
    let dias_desde_domingo = u64::from(agora.weekday().num_days_from_sunday());
    agora
        .date()
        .checked_sub_days(Days::new(dias_desde_domingo))
        .unwrap_or(agora.date())
        .and_time(NaiveTime::MIN)
}

/// Dia 1 do mês corrente, à meia-noite local.
pub fn inicio_do_mes(agora: NaiveDateTime) -> NaiveDateTime {
    agora
        .date()
        .with_day(1)
        .unwrap_or(agora.date())
        .and_time(NaiveTime::MIN)
}

/// 1º de janeiro do ano corrente, à meia-noite local.
pub fn inicio_do_ano(agora: NaiveDateTime) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(agora.year(), 1, 1)
        .unwrap_or(agora.date())
        .and_time(NaiveTime::MIN)
}

/// Particiona os agendamentos nas janelas hoje/semana/mês/ano.
///
/// "Hoje" compara a data do calendário; as demais janelas usam intervalo
/// meio-aberto `horario >= início` a partir do instante de referência.
pub fn particionar_por_periodo<'a>(
    agendamentos: &'a [AgendamentoResponse],
    agora: NaiveDateTime,
) -> ParticaoPeriodos<'a> {
    let semana = inicio_da_semana(agora);
    let mes = inicio_do_mes(agora);
    let ano = inicio_do_ano(agora);

    ParticaoPeriodos {
        hoje: agendamentos
            .iter()
            .filter(|a| a.horario.date() == agora.date())
            .collect(),
        semana: agendamentos.iter().filter(|a| a.horario >= semana).collect(),
        mes: agendamentos.iter().filter(|a| a.horario >= mes).collect(),
        ano: agendamentos.iter().filter(|a| a.horario >= ano).collect(),
    }
}

// =========================================================================
//  2. FATURAMENTO E CONTAGENS TRANSVERSAIS
// =========================================================================

/// Valor total de um agendamento: soma dos preços dos serviços anexados.
/// Agendamento sem serviços vale zero.
pub fn valor_total(agendamento: &AgendamentoResponse) -> Decimal {
    agendamento.servicos.iter().map(|s| s.preco).sum()
}

/// Faturamento de uma janela. Soma vazia é exatamente zero.
pub fn somar_faturamento(agendamentos: &[&AgendamentoResponse]) -> Decimal {
    agendamentos.iter().map(|a| valor_total(a)).sum()
}

/// Quantidade de clientes distintos na coleção.
pub fn clientes_distintos(agendamentos: &[AgendamentoResponse]) -> u64 {
    agendamentos
        .iter()
        .map(|a| a.cliente.id)
        .collect::<HashSet<_>>()
        .len() as u64
}

/// Total de serviços realizados (itens de serviço, não agendamentos).
pub fn servicos_realizados(agendamentos: &[AgendamentoResponse]) -> u64 {
    agendamentos.iter().map(|a| a.servicos.len() as u64).sum()
}

// =========================================================================
//  3. AGRUPAMENTO E RANKING
// =========================================================================

/// Medida usada para ordenar o ranking.
#[derive(Debug, Clone, Copy)]
pub enum MedidaRanking {
    Quantidade,
    Faturamento,
}

/// Um grupo acumulado: a entidade representativa é a do primeiro
/// agendamento visto para a chave; `ultima_visita` é o máximo corrente
/// dos horários do grupo.
pub struct GrupoRanqueado<T> {
    pub entidade: T,
    pub quantidade: u64,
    pub faturamento: Decimal,
    pub ultima_visita: NaiveDateTime,
}

/// Agrupa os agendamentos por chave estrangeira e devolve o top-N.
///
/// `ocorrencias` extrai de cada agendamento zero ou mais ocorrências
/// `(chave, entidade, valor)` — um serviço gera uma por serviço anexado,
/// um cliente gera uma por agendamento. Agendamento sem ocorrência não
/// contribui com nada. Os grupos acumulam na ordem em que as chaves
/// aparecem e a ordenação é estável, então empates ficam na ordem de
/// inserção. A lista é truncada em `limite`, nunca preenchida.
pub fn ranquear<T, F, I>(
    agendamentos: &[&AgendamentoResponse],
    medida: MedidaRanking,
    limite: usize,
    mut ocorrencias: F,
) -> Vec<GrupoRanqueado<T>>
where
    F: FnMut(&AgendamentoResponse) -> I,
    I: IntoIterator<Item = (i64, T, Decimal)>,
{
    let mut grupos: Vec<GrupoRanqueado<T>> = Vec::new();
    let mut indice: HashMap<i64, usize> = HashMap::new();

    for agendamento in agendamentos {
        for (chave, entidade, valor) in ocorrencias(agendamento) {
            match indice.get(&chave) {
                Some(&posicao) => {
                    let grupo = &mut grupos[posicao];
                    grupo.quantidade += 1;
                    grupo.faturamento += valor;
                    if agendamento.horario > grupo.ultima_visita {
                        grupo.ultima_visita = agendamento.horario;
                    }
                }
                None => {
                    indice.insert(chave, grupos.len());
                    grupos.push(GrupoRanqueado {
                        entidade,
                        quantidade: 1,
                        faturamento: valor,
                        ultima_visita: agendamento.horario,
                    });
                }
            }
        }
    }

    match medida {
        MedidaRanking::Quantidade => grupos.sort_by(|a, b| b.quantidade.cmp(&a.quantidade)),
        MedidaRanking::Faturamento => grupos.sort_by(|a, b| b.faturamento.cmp(&a.faturamento)),
    }
    grupos.truncate(limite);

    grupos
}

// =========================================================================
//  4. SÉRIES DE GRÁFICO
// =========================================================================

fn grafico_por_periodo(valores: [Decimal; 4]) -> Vec<DadosGrafico> {
    PERIODOS_GRAFICO
        .iter()
        .zip(CORES_GRAFICO)
        .zip(valores)
        .map(|((label, cor), valor)| DadosGrafico {
            label: (*label).to_string(),
            value: valor,
            color: Some(cor.to_string()),
        })
        .collect()
}

/// Série label/valor/cor com a quantidade de agendamentos por janela.
pub fn grafico_agendamentos(particao: &ParticaoPeriodos<'_>) -> Vec<DadosGrafico> {
    grafico_por_periodo([
        Decimal::from(particao.hoje.len() as u64),
        Decimal::from(particao.semana.len() as u64),
        Decimal::from(particao.mes.len() as u64),
        Decimal::from(particao.ano.len() as u64),
    ])
}

/// Série label/valor/cor com o faturamento por janela.
pub fn grafico_faturamento(particao: &ParticaoPeriodos<'_>) -> Vec<DadosGrafico> {
    grafico_por_periodo([
        somar_faturamento(&particao.hoje),
        somar_faturamento(&particao.semana),
        somar_faturamento(&particao.mes),
        somar_faturamento(&particao.ano),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::agendamento::{
        ClienteDto, ProfissionalDto, ServicoDto, StatusAgendamento,
    };

    fn dec(texto: &str) -> Decimal {
        texto.parse().unwrap()
    }

    fn horario(texto: &str) -> NaiveDateTime {
        NaiveDateTime::parse_from_str(texto, "%Y-%m-%dT%H:%M:%S").unwrap()
    }

    fn servico(id: i64, nome: &str, preco: &str) -> ServicoDto {
        ServicoDto {
            id,
            nome: nome.to_string(),
            preco: dec(preco),
            duracao_minutos: 30,
        }
    }

    fn agendamento(
        id: i64,
        cliente_id: i64,
        quando: &str,
        servicos: Vec<ServicoDto>,
    ) -> AgendamentoResponse {
        AgendamentoResponse {
            id,
            cliente: ClienteDto {
                id: cliente_id,
                nome: format!("Cliente {cliente_id}"),
                email: format!("cliente{cliente_id}@exemplo.com"),
            },
            profissional: ProfissionalDto {
                id: 1,
                nome: "Profissional 1".to_string(),
            },
            servicos,
            horario: horario(quando),
            status: StatusAgendamento::Confirmado,
        }
    }

    // Sábado 2024-06-15: a semana corrente começa no domingo 2024-06-09.
    const AGORA: &str = "2024-06-15T12:00:00";

    #[test]
    fn inicio_da_semana_cai_no_domingo() {
        assert_eq!(
            inicio_da_semana(horario(AGORA)),
            horario("2024-06-09T00:00:00")
        );
        // Domingo já é o início da própria semana
        assert_eq!(
            inicio_da_semana(horario("2024-06-09T08:00:00")),
            horario("2024-06-09T00:00:00")
        );
    }

    #[test]
    fn inicios_de_mes_e_ano() {
        assert_eq!(inicio_do_mes(horario(AGORA)), horario("2024-06-01T00:00:00"));
        assert_eq!(inicio_do_ano(horario(AGORA)), horario("2024-01-01T00:00:00"));
    }

    #[test]
    fn particiona_nas_quatro_janelas() {
        let agendamentos = vec![
            agendamento(1, 1, "2024-06-15T09:00:00", vec![]), // hoje
            agendamento(2, 1, "2024-06-10T09:00:00", vec![]), // semana e mês
            agendamento(3, 1, "2024-06-05T09:00:00", vec![]), // mês (antes do domingo)
            agendamento(4, 1, "2024-02-01T09:00:00", vec![]), // só ano
            agendamento(5, 1, "2023-12-31T09:00:00", vec![]), // fora de tudo
        ];

        let particao = particionar_por_periodo(&agendamentos, horario(AGORA));

        assert_eq!(particao.hoje.len(), 1);
        assert_eq!(particao.semana.len(), 2);
        assert_eq!(particao.mes.len(), 3);
        assert_eq!(particao.ano.len(), 4);
    }

    #[test]
    fn janelas_sao_subconjuntos_quando_aninhadas() {
        // Com o "agora" no meio do mês, hoje ⊆ semana ⊆ mês ⊆ ano
        let agendamentos: Vec<_> = (0..200)
            .map(|i| {
                let dia = 1 + (i % 28);
                let mes = 1 + (i % 12);
                agendamento(
                    i64::from(i),
                    1,
                    &format!("2024-{mes:02}-{dia:02}T10:00:00"),
                    vec![],
                )
            })
            .collect();

        let particao = particionar_por_periodo(&agendamentos, horario(AGORA));

        let ids = |grupo: &[&AgendamentoResponse]| -> HashSet<i64> {
            grupo.iter().map(|a| a.id).collect()
        };
        assert!(ids(&particao.hoje).is_subset(&ids(&particao.semana)));
        assert!(ids(&particao.semana).is_subset(&ids(&particao.mes)));
        assert!(ids(&particao.mes).is_subset(&ids(&particao.ano)));
    }

    #[test]
    fn faturamento_de_colecao_vazia_e_zero() {
        assert_eq!(somar_faturamento(&[]), Decimal::ZERO);
    }

    #[test]
    fn agendamento_sem_servicos_vale_zero() {
        let a = agendamento(1, 1, AGORA, vec![]);
        assert_eq!(valor_total(&a), Decimal::ZERO);
    }

    #[test]
    fn faturamento_soma_todos_os_servicos() {
        let a = agendamento(
            1,
            1,
            AGORA,
            vec![servico(1, "Corte", "45.00"), servico(2, "Barba", "30.00")],
        );
        let b = agendamento(2, 2, AGORA, vec![servico(1, "Corte", "45.00")]);

        assert_eq!(somar_faturamento(&[&a, &b]), dec("120.00"));
    }

    #[test]
    fn contagens_transversais() {
        let agendamentos = vec![
            agendamento(1, 7, AGORA, vec![servico(1, "Corte", "45.00")]),
            agendamento(
                2,
                7,
                AGORA,
                vec![servico(1, "Corte", "45.00"), servico(2, "Barba", "30.00")],
            ),
            agendamento(3, 8, AGORA, vec![]),
        ];

        assert_eq!(clientes_distintos(&agendamentos), 2);
        assert_eq!(servicos_realizados(&agendamentos), 3);
    }

    #[test]
    fn ranking_ordena_por_quantidade_e_trunca() {
        // S1 aparece em dois agendamentos, S2 em um
        let agendamentos = vec![
            agendamento(1, 1, "2024-06-10T09:00:00", vec![servico(1, "Corte", "45.00")]),
            agendamento(
                2,
                2,
                "2024-06-11T09:00:00",
                vec![servico(1, "Corte", "45.00"), servico(2, "Barba", "30.00")],
            ),
        ];
        let refs: Vec<&AgendamentoResponse> = agendamentos.iter().collect();

        let ranking = ranquear(&refs, MedidaRanking::Quantidade, 5, |a| {
            a.servicos
                .iter()
                .map(|s| (s.id, s.clone(), s.preco))
                .collect::<Vec<_>>()
        });

        assert_eq!(ranking.len(), 2); // truncado, nunca preenchido
        assert_eq!(ranking[0].entidade.id, 1);
        assert_eq!(ranking[0].quantidade, 2);
        assert_eq!(ranking[0].faturamento, dec("90.00"));
        assert_eq!(ranking[1].entidade.id, 2);
        assert_eq!(ranking[1].quantidade, 1);
    }

    #[test]
    fn ranking_respeita_o_limite() {
        let agendamentos: Vec<_> = (1..=8)
            .map(|i| {
                agendamento(i, i, "2024-06-10T09:00:00", vec![servico(i, "Serviço", "10.00")])
            })
            .collect();
        let refs: Vec<&AgendamentoResponse> = agendamentos.iter().collect();

        let ranking = ranquear(&refs, MedidaRanking::Quantidade, LIMITE_RANKING, |a| {
            a.servicos
                .iter()
                .map(|s| (s.id, s.clone(), s.preco))
                .collect::<Vec<_>>()
        });

        assert_eq!(ranking.len(), LIMITE_RANKING);
        // Empate geral: a ordem de inserção decide
        assert_eq!(ranking[0].entidade.id, 1);
        assert_eq!(ranking[4].entidade.id, 5);
    }

    #[test]
    fn ranking_de_clientes_guarda_a_ultima_visita() {
        let agendamentos = vec![
            agendamento(1, 7, "2024-06-01T09:00:00", vec![servico(1, "Corte", "45.00")]),
            agendamento(2, 7, "2024-06-14T09:00:00", vec![servico(1, "Corte", "45.00")]),
            agendamento(3, 7, "2024-06-03T09:00:00", vec![]),
        ];
        let refs: Vec<&AgendamentoResponse> = agendamentos.iter().collect();

        let ranking = ranquear(&refs, MedidaRanking::Quantidade, 5, |a| {
            vec![(a.cliente.id, a.cliente.clone(), valor_total(a))]
        });

        assert_eq!(ranking.len(), 1);
        assert_eq!(ranking[0].quantidade, 3);
        assert_eq!(ranking[0].faturamento, dec("90.00"));
        assert_eq!(ranking[0].ultima_visita, horario("2024-06-14T09:00:00"));
    }

    #[test]
    fn ranking_por_faturamento() {
        let agendamentos = vec![
            agendamento(1, 1, AGORA, vec![servico(1, "Corte", "45.00")]),
            agendamento(2, 2, AGORA, vec![servico(2, "Coloração", "120.00")]),
        ];
        let refs: Vec<&AgendamentoResponse> = agendamentos.iter().collect();

        let ranking = ranquear(&refs, MedidaRanking::Faturamento, 5, |a| {
            a.servicos
                .iter()
                .map(|s| (s.id, s.clone(), s.preco))
                .collect::<Vec<_>>()
        });

        assert_eq!(ranking[0].entidade.id, 2);
        assert_eq!(ranking[0].faturamento, dec("120.00"));
    }

    #[test]
    fn graficos_usam_periodos_e_cores_fixos() {
        let agendamentos = vec![agendamento(
            1,
            1,
            AGORA,
            vec![servico(1, "Corte", "45.00")],
        )];
        let particao = particionar_por_periodo(&agendamentos, horario(AGORA));

        let quantidades = grafico_agendamentos(&particao);
        let faturamentos = grafico_faturamento(&particao);

        assert_eq!(quantidades.len(), 4);
        for (i, ponto) in quantidades.iter().enumerate() {
            assert_eq!(ponto.label, PERIODOS_GRAFICO[i]);
            assert_eq!(ponto.color.as_deref(), Some(CORES_GRAFICO[i]));
            assert_eq!(ponto.value, Decimal::ONE);
        }
        assert!(faturamentos.iter().all(|p| p.value == dec("45.00")));
    }
}
