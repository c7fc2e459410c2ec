use anyhow::Result;
use dotenvy::dotenv;
use std::net::SocketAddr;
use tokio::signal;
use tracing::{error, info};

use bus_booking::config::environment::EnvironmentConfig;
use bus_booking::database::create_pool;
use bus_booking::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Cargar variables de entorno
    dotenv().ok();

    // Configurar logging
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    info!("🚌 Bus Booking System - API de reservas");
    info!("=======================================");

    let config = EnvironmentConfig::default();

    // Inicializar base de datos
    let pool = match create_pool(None).await {
        Ok(pool) => pool,
        Err(e) => {
            error!("❌ Error conectando a la base de datos: {}", e);
            return Err(anyhow::anyhow!("Error de base de datos: {}", e));
        }
    };

    let addr: SocketAddr = config.server_url().parse()?;
    let app_state = AppState::new(pool, config);
    let app = bus_booking::app(app_state);

    info!("🌐 Servidor iniciando en http://{}", addr);
    info!("🔍 Endpoints disponibles:");
    info!("   GET  /health - Health check");
    info!("🧑‍✈️ Endpoints - Conductor:");
    info!("   POST /conductors - Crear conductor");
    info!("   GET  /conductors - Listar conductores");
    info!("   GET  /conductors/:id - Obtener conductor");
    info!("   PUT  /conductors/:id - Actualizar conductor");
    info!("🚌 Endpoints - Bus:");
    info!("   POST /buses - Registrar bus");
    info!("   GET  /buses - Listar buses");
    info!("   GET  /buses/:id - Obtener bus");
    info!("👤 Endpoints - User:");
    info!("   POST /users - Crear usuario");
    info!("   GET  /users - Listar usuarios");
    info!("   GET  /users/:id - Obtener usuario");
    info!("🎫 Endpoints - Booking:");
    info!("   POST /bookings - Crear reserva");
    info!("   GET  /bookings?statuses=CONFIRMED,PENDING - Listar reservas por estado");
    info!("   GET  /bookings/:id - Obtener reserva");
    info!("   GET  /bookings/user/:user_id - Reservas de un usuario");
    info!("   PUT  /bookings/:id/cancel - Cancelar reserva");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| {
            error!("❌ Error del servidor: {}", e);
            e
        })?;

    info!("👋 Servidor terminado");
    Ok(())
}

/// Señal de apagado graceful
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("🛑 Señal Ctrl+C recibida, apagando servidor...");
        },
        _ = terminate => {
            info!("🛑 Señal de terminación recibida, apagando servidor...");
        },
    }
}
