//! # Punto de Entrada
//! src/main.rs
//!
//! Carga la configuración, inicializa el logger y arranca el servidor.

use clap::Parser;
use log::{error, info, warn};
use mini_http::config::Config;
use mini_http::logger;
use mini_http::server::Server;

fn main() {
    let config = Config::parse();

    logger::init(config.log_level);

    info!("Iniciando mini_http en {}", config.address());

    match &config.directory {
        Some(dir) if !dir.is_dir() => {
            // Se avisa pero no se aborta: los handlers responden 404 igual
            warn!("El directorio {} no existe o no es un directorio", dir.display());
        }
        Some(dir) => {
            info!("Sirviendo archivos desde {}", dir.display());
        }
        None => {
            info!("Sin directorio de archivos; /files responderá 404");
        }
    }

    let server = match Server::bind(config) {
        Ok(server) => server,
        Err(e) => {
            error!("No se pudo enlazar el servidor: {}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = server.run() {
        error!("El servidor terminó con error: {}", e);
        std::process::exit(1);
    }
}
