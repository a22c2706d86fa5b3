//src/main.rs

use dashboard::config::AppState;

#[tokio::main]
async fn main() {
    // Inicializa o logger
    tracing_subscriber::fmt().with_target(false).compact().init();

    // .expect() é bom aqui: se a configuração falhar, a aplicação não deve iniciar.
    let app_state = AppState::new().expect("Falha ao inicializar o estado da aplicação.");

    let agora = chrono::Local::now().naive_local();

    // Com um ID na linha de comando imprime o dashboard do profissional;
    // sem argumento, o dashboard geral.
    let snapshot = match std::env::args().nth(1) {
        Some(argumento) => {
            let profissional_id: i64 = argumento
                .parse()
                .expect("O argumento deve ser o ID numérico de um profissional");
            tracing::info!("🚀 Carregando dashboard do profissional {}", profissional_id);
            let data = app_state
                .dashboard_profissional_service
                .carregar_dashboard(profissional_id, agora)
                .await;
            serde_json::to_value(&data).expect("Falha ao serializar o snapshot")
        }
        None => {
            tracing::info!("🚀 Carregando dashboard geral");
            let data = app_state.dashboard_service.carregar_dashboard(agora).await;
            serde_json::to_value(&data).expect("Falha ao serializar o snapshot")
        }
    };

    println!(
        "{}",
        serde_json::to_string_pretty(&snapshot).expect("Falha ao formatar o snapshot")
    );
}
