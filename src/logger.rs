//! # Inicialización del Logging
//!
//! Logger de terminal sobre stderr, configurado una sola vez en el
//! arranque con el nivel que pide [`Config`](crate::config::Config).

use log::LevelFilter;
use simplelog::{ColorChoice, TermLogger, TerminalMode};

/// Inicializa el logger global
///
/// # Panics
///
/// Entra en pánico si se llama más de una vez; el logger global solo se
/// puede instalar en el arranque.
pub fn init(level: LevelFilter) {
    TermLogger::init(
        level,
        simplelog::Config::default(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    )
    .expect("el logger solo puede inicializarse una vez");
}
