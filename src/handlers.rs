//! # Handlers de Rutas
//! src/handlers.rs
//!
//! Este módulo implementa los handlers que el router registra por defecto.
//! Cada handler es una función pura de request + configuración a response:
//! no toca el socket ni guarda estado entre requests.

use crate::config::Config;
use crate::http::{Request, Response, StatusCode};
use log::debug;
use std::fs;

/// Handler de la ruta `/echo/{texto}`
///
/// Responde 200 con el texto que sigue al prefijo como body. Con target
/// exactamente `/echo/` el body queda vacío.
pub fn echo_handler(req: &Request, _config: &Config) -> Response {
    let text = req.target().strip_prefix("/echo/").unwrap_or("");

    Response::new(StatusCode::Ok).with_body(text)
}

/// Handler de la ruta `/files/{nombre}`
///
/// Lee el archivo pedido bajo el directorio configurado y responde 200 con
/// el contenido como `application/octet-stream`. Responde 404 si no hay
/// directorio configurado, si el target no trae nombre de archivo o si la
/// lectura falla por cualquier motivo.
pub fn files_handler(req: &Request, config: &Config) -> Response {
    // Obtener el nombre de archivo del target
    let filename = match req.target().strip_prefix("/files/") {
        Some(name) => name,
        None => {
            return Response::new(StatusCode::NotFound);
        }
    };

    let directory = match &config.directory {
        Some(dir) => dir,
        None => {
            debug!("Petición a /files sin directorio configurado");
            return Response::new(StatusCode::NotFound);
        }
    };

    let path = directory.join(filename);

    match fs::read(&path) {
        Ok(contents) => Response::new(StatusCode::Ok)
            .with_content_type("application/octet-stream")
            .with_body_bytes(contents),
        Err(e) => {
            debug!("No se pudo leer {}: {}", path.display(), e);
            Response::new(StatusCode::NotFound)
        }
    }
}

/// Handler de la ruta `/user-agent`
///
/// Responde 200 con el valor del header `User-Agent`; si el request no lo
/// trae, el body queda vacío.
pub fn user_agent_handler(req: &Request, _config: &Config) -> Response {
    let agent = req.header("User-Agent").unwrap_or("");

    Response::new(StatusCode::Ok).with_body(agent)
}

/// Handler de la ruta raíz `/`
///
/// Responde 200 sin body.
pub fn root_handler(_req: &Request, _config: &Config) -> Response {
    Response::new(StatusCode::Ok)
}
