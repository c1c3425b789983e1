//! # Módulo HTTP
//!
//! Este módulo maneja el subconjunto de HTTP/1.1 que habla el servidor,
//! sin librerías de protocolo. Incluye:
//!
//! - Parsing de requests desde el buffer crudo del socket
//! - Construcción y serialización de responses
//! - Códigos de estado
//!
//! El modelo es de un solo request por conexión: no hay keep-alive,
//! chunked transfer encoding ni lectura de bodies.
//!
//! ### Formato de Request
//!
//! ```text
//! GET /echo/hola HTTP/1.1\r\n
//! Host: localhost:4221\r\n
//! User-Agent: curl/7.68.0\r\n
//! \r\n
//! ```
//!
//! ### Formato de Response
//!
//! ```text
//! HTTP/1.1 200 \r\n
//! Content-Type: text/plain\r\n
//! Content-Length: 4\r\n
//! \r\n
//! hola
//! ```
//!
//! La status line lleva el código y un espacio, sin reason phrase.

pub mod request;   // Parsing de HTTP requests
pub mod response;  // Construcción de HTTP responses
pub mod status;    // Códigos de estado HTTP

// Re-exportamos los tipos principales para facilitar su uso
// Esto permite usar `http::Request` en vez de `http::request::Request`
pub use request::{ParseError, Request};
pub use response::{Response, PARSE_ERROR_RESPONSE};
pub use status::StatusCode;
