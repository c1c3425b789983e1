//! # Configuración del Servidor
//! src/config.rs
//!
//! Este módulo define la configuración del servidor HTTP, que se carga una
//! sola vez al arrancar, con argumentos de línea de comandos o variables de
//! entorno. Después del arranque la configuración es de solo lectura: se
//! comparte en un `Arc` y ningún request la modifica.
//!
//! ## Ejemplos de uso
//!
//! ### CLI
//! ```bash
//! ./mini_http --port 4221 --directory /tmp/archivos
//! ```
//!
//! ### Variables de entorno
//! ```bash
//! HTTP_PORT=4221 FILES_DIR=/tmp/archivos ./mini_http
//! ```

use clap::Parser;
use log::LevelFilter;
use std::path::PathBuf;

/// Configuración del servidor HTTP
#[derive(Debug, Clone, Parser)]
#[command(name = "mini_http")]
#[command(about = "Servidor HTTP/1.1 mínimo: una conexión, un request, una respuesta")]
#[command(version = "0.1.0")]
pub struct Config {
    /// Puerto en el que escucha el servidor
    #[arg(short, long, default_value = "4221", env = "HTTP_PORT")]
    pub port: u16,

    /// Dirección en la que escucha el servidor
    #[arg(long, default_value = "127.0.0.1", env = "HTTP_HOST")]
    pub host: String,

    /// Directorio base para servir archivos (habilita las rutas /files)
    ///
    /// Sin este valor, toda petición a /files responde 404.
    #[arg(long, env = "FILES_DIR")]
    pub directory: Option<PathBuf>,

    /// Nivel de logging (error, warn, info, debug, trace)
    #[arg(long, default_value = "info", env = "LOG_LEVEL")]
    pub log_level: LevelFilter,
}

impl Config {
    /// Obtiene la dirección completa del servidor
    ///
    /// # Ejemplo
    ///
    /// ```
    /// use mini_http::config::Config;
    ///
    /// let config = Config::default();
    /// assert_eq!(config.address(), "127.0.0.1:4221");
    /// ```
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            port: 4221,
            host: "127.0.0.1".to_string(),
            directory: None,
            log_level: LevelFilter::Info,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();

        assert_eq!(config.port, 4221);
        assert_eq!(config.host, "127.0.0.1");
        assert!(config.directory.is_none());
        assert_eq!(config.log_level, LevelFilter::Info);
    }

    #[test]
    fn test_address_format() {
        let config = Config {
            host: "0.0.0.0".to_string(),
            port: 8080,
            ..Config::default()
        };

        assert_eq!(config.address(), "0.0.0.0:8080");
    }

    #[test]
    fn test_parse_flags() {
        // Todos los flags explícitos para no depender del entorno
        let config = Config::try_parse_from([
            "mini_http",
            "--port",
            "9000",
            "--host",
            "0.0.0.0",
            "--directory",
            "/tmp/archivos",
            "--log-level",
            "debug",
        ])
        .unwrap();

        assert_eq!(config.port, 9000);
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.directory, Some(PathBuf::from("/tmp/archivos")));
        assert_eq!(config.log_level, LevelFilter::Debug);
    }

    #[test]
    fn test_parse_short_port_flag() {
        let config = Config::try_parse_from([
            "mini_http",
            "-p",
            "5000",
            "--host",
            "127.0.0.1",
            "--log-level",
            "info",
        ])
        .unwrap();

        assert_eq!(config.port, 5000);
    }

    #[test]
    fn test_parse_invalid_port_fails() {
        let result = Config::try_parse_from(["mini_http", "--port", "no-es-numero"]);

        assert!(result.is_err());
    }

    #[test]
    fn test_parse_invalid_log_level_fails() {
        let result = Config::try_parse_from(["mini_http", "--log-level", "ruidoso"]);

        assert!(result.is_err());
    }
}
