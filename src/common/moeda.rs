// src/common/moeda.rs

use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer};

// O backend ora devolve o preço como número (45.0), ora como string
// formatada ("R$ 45,00"). Normalizamos tudo para Decimal já na borda,
// assim a agregação nunca precisa lidar com a ambiguidade.
#[derive(Deserialize)]
#[serde(untagged)]
enum PrecoBruto {
    Numero(Decimal),
    Texto(String),
    Nulo(Option<()>),
}

/// Desserializa um preço que pode vir como número ou string formatada.
///
/// Use com `#[serde(deserialize_with = "crate::common::moeda::decimal_flexivel")]`.
pub fn decimal_flexivel<'de, D>(deserializer: D) -> Result<Decimal, D::Error>
where
    D: Deserializer<'de>,
{
    match PrecoBruto::deserialize(deserializer)? {
        PrecoBruto::Numero(numero) => Ok(numero),
        PrecoBruto::Texto(texto) => Ok(normalizar_preco(&texto)),
        PrecoBruto::Nulo(_) => Ok(Decimal::ZERO),
    }
}

/// Converte uma string de moeda pt-BR ("R$ 1.234,56") em Decimal.
///
/// Se houver vírgula, os pontos são separadores de milhar; sem vírgula,
/// o ponto é o separador decimal. Valor ilegível vira zero em vez de
/// derrubar a agregação inteira por causa de um registro malformado.
pub fn normalizar_preco(bruto: &str) -> Decimal {
    let sem_prefixo = bruto.trim().trim_start_matches("R$").trim();

    let normalizado = if sem_prefixo.contains(',') {
        sem_prefixo.replace('.', "").replace(',', ".")
    } else {
        sem_prefixo.to_string()
    };

    normalizado.parse::<Decimal>().unwrap_or(Decimal::ZERO)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dec(texto: &str) -> Decimal {
        texto.parse().unwrap()
    }

    #[test]
    fn normaliza_string_com_prefixo() {
        assert_eq!(normalizar_preco("R$ 45,00"), dec("45.00"));
        assert_eq!(normalizar_preco("R$45,50"), dec("45.50"));
    }

    #[test]
    fn normaliza_milhar_pt_br() {
        assert_eq!(normalizar_preco("R$ 1.234,56"), dec("1234.56"));
    }

    #[test]
    fn aceita_ponto_decimal_sem_virgula() {
        assert_eq!(normalizar_preco("45.00"), dec("45.00"));
    }

    #[test]
    fn valor_ilegivel_vira_zero() {
        assert_eq!(normalizar_preco("gratis"), Decimal::ZERO);
        assert_eq!(normalizar_preco(""), Decimal::ZERO);
    }

    #[test]
    fn desserializa_numero_e_string_no_mesmo_valor() {
        #[derive(Deserialize)]
        struct Caso {
            #[serde(deserialize_with = "decimal_flexivel")]
            preco: Decimal,
        }

        let texto: Caso = serde_json::from_str(r#"{"preco": "R$ 45,00"}"#).unwrap();
        let numero: Caso = serde_json::from_str(r#"{"preco": 45}"#).unwrap();
        let nulo: Caso = serde_json::from_str(r#"{"preco": null}"#).unwrap();

        assert_eq!(texto.preco, dec("45.00"));
        assert_eq!(numero.preco, dec("45"));
        assert_eq!(texto.preco, numero.preco);
        assert_eq!(nulo.preco, Decimal::ZERO);
    }
}
