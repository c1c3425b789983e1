//! # Módulo del Servidor HTTP
//! src/server/mod.rs
//!
//! Este módulo implementa el servidor TCP que:
//! 1. Escucha en la dirección configurada
//! 2. Acepta conexiones entrantes
//! 3. Lee y parsea un request por conexión
//! 4. Enruta, responde y cierra la conexión

pub mod tcp;

// Re-exportar para facilitar el uso
pub use tcp::{Server, READ_BUFFER_SIZE};
