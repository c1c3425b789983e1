//! # Parsing de Requests HTTP
//! src/http/request.rs
//!
//! Este módulo convierte el buffer crudo leído del socket en un request
//! estructurado: método, target y headers.
//!
//! ## Formato esperado
//!
//! ```text
//! GET /echo/hola HTTP/1.1\r\n
//! Host: localhost:4221\r\n
//! User-Agent: curl/7.68.0\r\n
//! \r\n
//! ```
//!
//! El parser es deliberadamente permisivo: no valida el método contra una
//! lista fija, ignora la versión del protocolo (esté o no), descarta en
//! silencio las líneas de header sin `:` y tolera líneas en blanco sueltas.
//! Las únicas condiciones duras son un mínimo de dos líneas y una request
//! line con método y target no vacíos.

use std::collections::HashMap;
use thiserror::Error;

/// Errores de parsing de un request
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// El buffer no contiene una request line reconocible
    #[error("malformed request: {0}")]
    Malformed(&'static str),
}

/// Representa un request HTTP parseado
#[derive(Debug, Clone)]
pub struct Request {
    /// Método HTTP tal cual llegó (no se valida contra una lista fija)
    method: String,

    /// Target de la petición (ej: "/echo/hola")
    target: String,

    /// Headers HTTP (ej: {"Host": "localhost:4221"})
    headers: HashMap<String, String>,
}

impl Request {
    /// Parsea un request HTTP desde bytes
    ///
    /// Los bytes se decodifican con UTF-8 lossy; los inválidos se vuelven
    /// U+FFFD y siguen el camino normal, no hay un error de encoding.
    ///
    /// # Retorna
    ///
    /// * `Ok(Request)` - Request parseado; `method` y `target` quedan
    ///   garantizados no vacíos y `headers` siempre existe (puede ser vacío)
    /// * `Err(ParseError)` - El buffer tiene menos de dos líneas o la
    ///   request line no tiene método y target
    ///
    /// # Ejemplo
    ///
    /// ```
    /// use mini_http::http::Request;
    ///
    /// let raw = b"GET /echo/hola HTTP/1.1\r\nHost: localhost\r\n\r\n";
    /// let request = Request::parse(raw).unwrap();
    ///
    /// assert_eq!(request.method(), "GET");
    /// assert_eq!(request.target(), "/echo/hola");
    /// assert_eq!(request.header("Host"), Some("localhost"));
    /// ```
    pub fn parse(raw: &[u8]) -> Result<Self, ParseError> {
        let text = String::from_utf8_lossy(raw);

        // Separar por '\n'; el '\r' queda pegado al contenido y lo elimina
        // el trim por línea.
        let lines: Vec<&str> = text.split('\n').collect();

        if lines.len() < 2 {
            return Err(ParseError::Malformed("fewer than two lines"));
        }

        let (method, target) = Self::parse_request_line(lines[0])?;
        let headers = Self::parse_headers(&lines[1..]);

        Ok(Request {
            method,
            target,
            headers,
        })
    }

    /// Parsea la request line (primera línea del request)
    ///
    /// Formato: `METHOD TARGET [VERSION]`. La versión es opcional y se
    /// ignora, igual que cualquier token posterior.
    fn parse_request_line(line: &str) -> Result<(String, String), ParseError> {
        // Split por espacios simples: dos espacios seguidos producen un
        // token vacío, que se rechaza abajo.
        let tokens: Vec<&str> = line.trim().split(' ').collect();

        if tokens.len() < 2 {
            return Err(ParseError::Malformed("request line needs method and target"));
        }

        if tokens[0].is_empty() || tokens[1].is_empty() {
            return Err(ParseError::Malformed("empty method or target"));
        }

        Ok((tokens[0].to_string(), tokens[1].to_string()))
    }

    /// Parsea las líneas de headers
    ///
    /// Cada línea se corta en el primer `:`; nombre y valor se insertan con
    /// trim y un nombre repetido sobrescribe el valor anterior. Líneas
    /// vacías (incluida la separadora del body) se saltan, y líneas sin `:`
    /// se ignoran en silencio. El servidor nunca lee bodies, así que
    /// cualquier línea posterior a la separadora pasa por estas mismas
    /// reglas.
    fn parse_headers(lines: &[&str]) -> HashMap<String, String> {
        let mut headers = HashMap::new();

        for line in lines {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }

            if let Some((name, value)) = line.split_once(':') {
                headers.insert(name.trim().to_string(), value.trim().to_string());
            }
        }

        headers
    }

    // === Métodos de acceso ===

    /// Obtiene el método HTTP del request
    pub fn method(&self) -> &str {
        &self.method
    }

    /// Obtiene el target (path) del request
    pub fn target(&self) -> &str {
        &self.target
    }

    /// Obtiene todos los headers
    pub fn headers(&self) -> &HashMap<String, String> {
        &self.headers
    }

    /// Obtiene un header específico
    ///
    /// La búsqueda usa el nombre tal cual llegó: no hay normalización de
    /// mayúsculas ni en el parseo ni aquí.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).map(|s| s.as_str())
    }
}
