//! # Router de Peticiones
//! src/router/mod.rs
//!
//! Este módulo enruta cada request parseado al handler que corresponde.
//! Las rutas se registran en una lista ordenada y se evalúan en orden de
//! registro: gana la primera que coincide, por prefijo o por igualdad
//! exacta del target. Si ninguna coincide, el router responde 404.
//!
//! ## Arquitectura
//!
//! ```text
//! Request → Router → Handler → Response
//! ```
//!
//! El router se construye una vez en el arranque y se comparte entre los
//! hilos de conexión en un `Arc`; después de construido no se modifica.

use crate::config::Config;
use crate::handlers;
use crate::http::{Request, Response, StatusCode};
use std::sync::Arc;

/// Firma de un handler de ruta
///
/// Recibe el request y la configuración compartida, y devuelve la
/// respuesta completa. Los handlers no tocan el socket.
pub type Handler = fn(&Request, &Config) -> Response;

/// Patrón de coincidencia de una ruta
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Pattern {
    /// Coincide si el target empieza con el prefijo
    Prefix(String),

    /// Coincide si el target es exactamente igual
    Exact(String),
}

impl Pattern {
    /// Evalúa el patrón contra un target
    fn matches(&self, target: &str) -> bool {
        match self {
            Pattern::Prefix(prefix) => target.starts_with(prefix.as_str()),
            Pattern::Exact(path) => target == path,
        }
    }
}

/// Router con rutas ordenadas y configuración compartida
pub struct Router {
    /// Rutas en orden de registro
    routes: Vec<(Pattern, Handler)>,

    /// Configuración de solo lectura que reciben los handlers
    config: Arc<Config>,
}

impl Router {
    /// Crea un router sin rutas
    pub fn new(config: Arc<Config>) -> Self {
        Router {
            routes: Vec::new(),
            config,
        }
    }

    /// Crea un router con las rutas por defecto del servidor
    ///
    /// El orden de registro importa: `/echo/` y `/files` van antes que la
    /// raíz exacta, y ninguna ruta registrada después puede robarle un
    /// target a una anterior.
    ///
    /// # Ejemplo
    ///
    /// ```
    /// use std::sync::Arc;
    /// use mini_http::config::Config;
    /// use mini_http::http::{Request, StatusCode};
    /// use mini_http::router::Router;
    ///
    /// let router = Router::with_default_routes(Arc::new(Config::default()));
    /// let request = Request::parse(b"GET /echo/hola HTTP/1.1\r\n\r\n").unwrap();
    ///
    /// let response = router.route(&request);
    /// assert_eq!(response.status(), StatusCode::Ok);
    /// assert_eq!(response.body(), b"hola");
    /// ```
    pub fn with_default_routes(config: Arc<Config>) -> Self {
        let mut router = Router::new(config);

        router.register_prefix("/echo/", handlers::echo_handler);
        router.register_prefix("/files", handlers::files_handler);
        router.register_prefix("/user-agent", handlers::user_agent_handler);
        router.register_exact("/", handlers::root_handler);

        router
    }

    /// Registra una ruta por prefijo
    pub fn register_prefix(&mut self, prefix: &str, handler: Handler) {
        self.routes.push((Pattern::Prefix(prefix.to_string()), handler));
    }

    /// Registra una ruta por coincidencia exacta
    pub fn register_exact(&mut self, path: &str, handler: Handler) {
        self.routes.push((Pattern::Exact(path.to_string()), handler));
    }

    /// Enruta un request al primer handler cuyo patrón coincide
    ///
    /// Si ningún patrón coincide, responde 404 sin body.
    pub fn route(&self, req: &Request) -> Response {
        for (pattern, handler) in &self.routes {
            if pattern.matches(req.target()) {
                return handler(req, &self.config);
            }
        }

        Response::new(StatusCode::NotFound)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(raw: &[u8]) -> Request {
        Request::parse(raw).unwrap()
    }

    fn default_router() -> Router {
        Router::with_default_routes(Arc::new(Config::default()))
    }

    #[test]
    fn test_route_echo() {
        let response = default_router().route(&request(b"GET /echo/prueba HTTP/1.1\r\n\r\n"));

        assert_eq!(response.status(), StatusCode::Ok);
        assert_eq!(response.body(), b"prueba");
    }

    #[test]
    fn test_route_user_agent() {
        let response = default_router().route(&request(
            b"GET /user-agent HTTP/1.1\r\nUser-Agent: router-test\r\n\r\n",
        ));

        assert_eq!(response.body(), b"router-test");
    }

    #[test]
    fn test_route_user_agent_matches_by_prefix() {
        // La ruta se registra por prefijo: un sufijo extra en el target
        // también cae en el handler de User-Agent
        let response = default_router().route(&request(
            b"GET /user-agent/extra HTTP/1.1\r\nUser-Agent: prefijo-test\r\n\r\n",
        ));

        assert_eq!(response.status(), StatusCode::Ok);
        assert_eq!(response.body(), b"prefijo-test");
    }

    #[test]
    fn test_route_root_exact() {
        let response = default_router().route(&request(b"GET / HTTP/1.1\r\n\r\n"));

        assert_eq!(response.status(), StatusCode::Ok);
        assert_eq!(response.body(), b"");
    }

    #[test]
    fn test_route_unknown_is_not_found() {
        // "/desconocida" no coincide con ningún prefijo y la raíz es exacta
        let response = default_router().route(&request(b"GET /desconocida HTTP/1.1\r\n\r\n"));

        assert_eq!(response.status(), StatusCode::NotFound);
    }

    #[test]
    fn test_route_files_without_directory() {
        // Sin directorio configurado, el prefijo /files igual captura el
        // target y el handler decide el 404
        let response = default_router().route(&request(b"GET /files/x.txt HTTP/1.1\r\n\r\n"));

        assert_eq!(response.status(), StatusCode::NotFound);
    }

    #[test]
    fn test_route_echo_without_trailing_slash_falls_through() {
        // "/echo" no coincide con el prefijo "/echo/": sigue de largo y
        // termina en el 404 del router
        let response = default_router().route(&request(b"GET /echo HTTP/1.1\r\n\r\n"));

        assert_eq!(response.status(), StatusCode::NotFound);
    }

    #[test]
    fn test_default_route_order() {
        // "/echo/files" coincide primero con el prefijo "/echo/": el
        // target nunca llega a la ruta de archivos
        let response = default_router().route(&request(b"GET /echo/files HTTP/1.1\r\n\r\n"));

        assert_eq!(response.status(), StatusCode::Ok);
        assert_eq!(response.body(), b"files");
    }

    #[test]
    fn test_first_match_wins() {
        fn primero(_req: &Request, _config: &Config) -> Response {
            Response::new(StatusCode::Ok).with_body("primero")
        }
        fn segundo(_req: &Request, _config: &Config) -> Response {
            Response::new(StatusCode::Ok).with_body("segundo")
        }

        let mut router = Router::new(Arc::new(Config::default()));
        router.register_prefix("/a", primero);
        router.register_prefix("/a/b", segundo);

        // Ambos patrones coinciden con "/a/b/c", gana el registrado primero
        let response = router.route(&request(b"GET /a/b/c HTTP/1.1\r\n\r\n"));
        assert_eq!(response.body(), b"primero");
    }

    #[test]
    fn test_empty_router_is_not_found() {
        let router = Router::new(Arc::new(Config::default()));
        let response = router.route(&request(b"GET / HTTP/1.1\r\n\r\n"));

        assert_eq!(response.status(), StatusCode::NotFound);
    }

    #[test]
    fn test_pattern_matching() {
        assert!(Pattern::Prefix("/echo/".to_string()).matches("/echo/hola"));
        assert!(!Pattern::Prefix("/echo/".to_string()).matches("/echo"));
        assert!(Pattern::Exact("/".to_string()).matches("/"));
        assert!(!Pattern::Exact("/".to_string()).matches("/otra"));
    }
}
