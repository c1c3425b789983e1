//! # Construcción de Responses HTTP
//! src/http/response.rs
//!
//! Este módulo arma el frame de respuesta que se escribe al socket. El
//! formato es fijo y se emite byte a byte:
//!
//! ```text
//! HTTP/1.1 200 \r\n
//! Content-Type: text/plain\r\n
//! Content-Length: 5\r\n
//! \r\n
//! hola!
//! ```
//!
//! La status line lleva el código numérico seguido de un espacio y sin
//! reason phrase ("HTTP/1.1 200 \r\n"); los clientes HTTP/1.1 la aceptan
//! igual. Siempre se emiten exactamente `Content-Type` y `Content-Length`,
//! también con body vacío.

use super::StatusCode;

/// Respuesta fija para un request que no se pudo parsear
///
/// No comparte el formato de [`Response::to_bytes`]: sin espacio después
/// del código y sin headers. Se escribe tal cual antes de cerrar la
/// conexión.
pub const PARSE_ERROR_RESPONSE: &[u8] = b"HTTP/1.1 500\r\n\r\n";

/// Representa una respuesta HTTP lista para serializar
#[derive(Debug, Clone)]
pub struct Response {
    /// Código de estado de la respuesta
    status: StatusCode,

    /// Valor del header `Content-Type` (ej: "text/plain")
    content_type: &'static str,

    /// Body de la respuesta en bytes
    body: Vec<u8>,
}

impl Response {
    /// Crea una respuesta sin body con `Content-Type: text/plain`
    ///
    /// # Ejemplo
    ///
    /// ```
    /// use mini_http::http::{Response, StatusCode};
    ///
    /// let response = Response::new(StatusCode::Ok);
    /// assert_eq!(response.body(), b"");
    /// ```
    pub fn new(status: StatusCode) -> Self {
        Response {
            status,
            content_type: "text/plain",
            body: Vec::new(),
        }
    }

    /// Cambia el `Content-Type` de la respuesta
    pub fn with_content_type(mut self, content_type: &'static str) -> Self {
        self.content_type = content_type;
        self
    }

    /// Asigna un body de texto
    pub fn with_body(mut self, body: &str) -> Self {
        self.body = body.as_bytes().to_vec();
        self
    }

    /// Asigna un body binario
    pub fn with_body_bytes(mut self, body: Vec<u8>) -> Self {
        self.body = body;
        self
    }

    /// Serializa la respuesta al frame de bytes que va al socket
    ///
    /// `Content-Length` se calcula del body real; el orden de los headers
    /// es siempre el mismo.
    ///
    /// # Ejemplo
    ///
    /// ```
    /// use mini_http::http::{Response, StatusCode};
    ///
    /// let bytes = Response::new(StatusCode::Ok).with_body("hola!").to_bytes();
    /// assert_eq!(
    ///     bytes,
    ///     b"HTTP/1.1 200 \r\nContent-Type: text/plain\r\nContent-Length: 5\r\n\r\nhola!"
    /// );
    /// ```
    pub fn to_bytes(&self) -> Vec<u8> {
        let head = format!(
            "HTTP/1.1 {} \r\nContent-Type: {}\r\nContent-Length: {}\r\n\r\n",
            self.status.as_u16(),
            self.content_type,
            self.body.len()
        );

        let mut bytes = head.into_bytes();
        bytes.extend_from_slice(&self.body);
        bytes
    }

    // === Métodos de acceso ===

    /// Obtiene el código de estado
    pub fn status(&self) -> StatusCode {
        self.status
    }

    /// Obtiene el `Content-Type`
    pub fn content_type(&self) -> &str {
        self.content_type
    }

    /// Obtiene el body
    pub fn body(&self) -> &[u8] {
        &self.body
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_bytes_with_text_body() {
        let bytes = Response::new(StatusCode::Ok).with_body("hello").to_bytes();

        assert_eq!(
            bytes,
            b"HTTP/1.1 200 \r\nContent-Type: text/plain\r\nContent-Length: 5\r\n\r\nhello"
        );
    }

    #[test]
    fn test_to_bytes_empty_body() {
        let bytes = Response::new(StatusCode::Ok).to_bytes();

        // Con body vacío los dos headers se emiten igual
        assert_eq!(
            bytes,
            b"HTTP/1.1 200 \r\nContent-Type: text/plain\r\nContent-Length: 0\r\n\r\n"
        );
    }

    #[test]
    fn test_to_bytes_not_found() {
        let bytes = Response::new(StatusCode::NotFound).to_bytes();

        assert_eq!(
            bytes,
            b"HTTP/1.1 404 \r\nContent-Type: text/plain\r\nContent-Length: 0\r\n\r\n"
        );
    }

    #[test]
    fn test_content_length_counts_bytes() {
        // "año" tiene 3 caracteres pero 4 bytes en UTF-8
        let bytes = Response::new(StatusCode::Ok).with_body("año").to_bytes();

        assert_eq!(
            bytes,
            b"HTTP/1.1 200 \r\nContent-Type: text/plain\r\nContent-Length: 4\r\n\r\na\xC3\xB1o"
        );
    }

    #[test]
    fn test_to_bytes_binary_body() {
        let body = vec![0x00, 0xFF, 0x10];
        let bytes = Response::new(StatusCode::Ok)
            .with_content_type("application/octet-stream")
            .with_body_bytes(body.clone())
            .to_bytes();

        assert_eq!(
            &bytes[..bytes.len() - 3],
            b"HTTP/1.1 200 \r\nContent-Type: application/octet-stream\r\nContent-Length: 3\r\n\r\n"
        );
        assert_eq!(&bytes[bytes.len() - 3..], &body[..]);
    }

    #[test]
    fn test_default_content_type() {
        let response = Response::new(StatusCode::Ok);

        assert_eq!(response.content_type(), "text/plain");
    }

    #[test]
    fn test_status_line_has_trailing_space() {
        let bytes = Response::new(StatusCode::Ok).to_bytes();

        // El espacio después del código es parte del formato
        assert!(bytes.starts_with(b"HTTP/1.1 200 \r\n"));
    }

    #[test]
    fn test_parse_error_response_bytes() {
        // La respuesta de error de parseo no lleva espacio ni headers
        assert_eq!(PARSE_ERROR_RESPONSE, b"HTTP/1.1 500\r\n\r\n");
    }
}
