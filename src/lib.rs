//! # mini_http
//! src/lib.rs
//!
//! Servidor HTTP/1.1 mínimo con un modelo de un request por conexión:
//! cada conexión TCP se lee una sola vez, el request se parsea y se
//! enruta, la respuesta se escribe completa y la conexión se cierra.
//!
//! ## Arquitectura
//!
//! El servidor está dividido en módulos especializados:
//! - `http`: Parsing de requests, construcción de responses y status codes
//! - `config`: Configuración por CLI y variables de entorno
//! - `logger`: Inicialización del logging a stderr
//! - `router`: Enrutamiento por prefijo del target a handlers
//! - `handlers`: Las rutas del servidor (echo, files, user-agent, raíz)
//! - `server`: Socket de escucha y manejo concurrente de conexiones
//!
//! ## Ejemplo de uso
//!
//! ```no_run
//! use mini_http::config::Config;
//! use mini_http::server::Server;
//!
//! let server = Server::bind(Config::default()).unwrap();
//! server.run().unwrap();
//! ```

pub mod http;
pub mod config;
pub mod logger;
pub mod router;
pub mod handlers;
pub mod server;
