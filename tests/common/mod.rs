// tests/common/mod.rs
#![allow(dead_code)] // nem todo teste usa todas as fixtures
//
// Fixtures compartilhadas pelos testes de integração. O `agora` é
// congelado num sábado no meio do mês para que "agora - 10 dias" caia
// no mesmo mês e "agora - 400 dias" caia no ano anterior.

use chrono::NaiveDateTime;
use serde_json::{Value, json};
use wiremock::MockServer;

use dashboard::gateway::ApiGateway;

pub const AGORA: &str = "2024-06-15T12:00:00";

pub fn agora() -> NaiveDateTime {
    NaiveDateTime::parse_from_str(AGORA, "%Y-%m-%dT%H:%M:%S").unwrap()
}

pub fn gateway_para(server: &MockServer) -> ApiGateway {
    ApiGateway::new(reqwest::Client::new(), server.uri(), None)
}

pub fn servico_json(id: i64, nome: &str, preco: Value) -> Value {
    json!({
        "id": id,
        "nome": nome,
        "preco": preco,
        "duracaoMinutos": 30
    })
}

pub fn agendamento_json(
    id: i64,
    profissional_id: i64,
    cliente_id: i64,
    horario: &str,
    status: &str,
    servicos: Value,
) -> Value {
    json!({
        "id": id,
        "cliente": {
            "id": cliente_id,
            "nome": format!("Cliente {cliente_id}"),
            "email": format!("cliente{cliente_id}@exemplo.com")
        },
        "profissional": {
            "id": profissional_id,
            "nome": format!("Profissional {profissional_id}")
        },
        "servicos": servicos,
        "horario": horario,
        "status": status
    })
}

pub fn profissional_json(id: i64) -> Value {
    json!({
        "id": id,
        "nome": format!("Profissional {id}"),
        "cpf": "123.456.789-00",
        "telefone": "(11) 91234-5678",
        "email": format!("profissional{id}@barber.com"),
        "especialidades": ["CORTE_MASCULINO", "BARBA"],
        "barbeariaId": 1
    })
}

pub fn cliente_json(id: i64) -> Value {
    json!({
        "id": id,
        "nome": format!("Cliente {id}"),
        "cpf": "987.654.321-00",
        "telefone": "(11) 99876-5432",
        "email": format!("cliente{id}@exemplo.com"),
        "dataNascimento": "1990-03-10"
    })
}

pub fn barbearia_json(id: i64) -> Value {
    json!({
        "id": id,
        "nome": format!("Barbearia {id}"),
        "cnpj": "12.345.678/0001-90",
        "telefone": "(11) 3456-7890",
        "email": format!("contato{id}@barber.com"),
        "endereco": {
            "rua": "Rua das Tesouras",
            "numero": "100",
            "bairro": "Centro",
            "cidade": "São Paulo",
            "estado": "SP",
            "cep": "01000-000"
        },
        "horarioFuncionamento": {
            "abertura": "09:00",
            "fechamento": "19:00"
        }
    })
}
