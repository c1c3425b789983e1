//! # Servidor TCP
//! src/server/tcp.rs
//!
//! Este módulo implementa el ciclo principal del servidor: acepta
//! conexiones TCP y atiende cada una en su propio hilo. El modelo es
//! estrictamente un request por conexión: una sola lectura del socket,
//! una respuesta, y el stream se cierra al salir del scope. No hay
//! keep-alive ni pipelining.
//!
//! La configuración y el router se construyen una vez y se comparten
//! entre hilos con `Arc`; ningún hilo los modifica.

use crate::config::Config;
use crate::http::{Request, PARSE_ERROR_RESPONSE};
use crate::router::Router;
use log::{debug, error, info, warn};
use std::io::{self, Read, Write};
use std::net::{SocketAddr, TcpListener, TcpStream};
use std::sync::Arc;
use std::thread;

/// Tamaño del buffer de lectura por conexión
///
/// Cada conexión hace una sola lectura sobre un buffer de este tamaño; un
/// request más largo queda truncado y se parsea lo que haya llegado.
pub const READ_BUFFER_SIZE: usize = 2048;

/// Servidor HTTP sobre TCP
pub struct Server {
    /// Configuración compartida de solo lectura
    config: Arc<Config>,

    /// Router con las rutas por defecto
    router: Arc<Router>,

    /// Socket de escucha ya enlazado
    listener: TcpListener,
}

impl Server {
    /// Enlaza el socket de escucha y construye el router
    ///
    /// Con puerto 0 el sistema asigna un puerto efímero; la dirección real
    /// se consulta con [`Server::local_addr`].
    ///
    /// # Retorna
    ///
    /// * `Ok(Server)` - Servidor listo para [`Server::run`]
    /// * `Err(io::Error)` - No se pudo enlazar la dirección configurada
    pub fn bind(config: Config) -> io::Result<Self> {
        let listener = TcpListener::bind(config.address())?;
        let config = Arc::new(config);
        let router = Arc::new(Router::with_default_routes(Arc::clone(&config)));

        info!("Socket TCP enlazado en {}", listener.local_addr()?);

        Ok(Server {
            config,
            router,
            listener,
        })
    }

    /// Obtiene la dirección real del socket de escucha
    pub fn local_addr(&self) -> io::Result<SocketAddr> {
        self.listener.local_addr()
    }

    /// Ejecuta el ciclo de aceptación de conexiones
    ///
    /// Cada conexión aceptada se atiende en un hilo nuevo; un error al
    /// aceptar se registra y el ciclo continúa con la siguiente. Este
    /// método solo retorna si el iterador de conexiones termina.
    pub fn run(&self) -> io::Result<()> {
        info!("Servidor escuchando en {}", self.config.address());

        for stream in self.listener.incoming() {
            match stream {
                Ok(stream) => {
                    let router = Arc::clone(&self.router);
                    let peer = stream
                        .peer_addr()
                        .map(|addr| addr.to_string())
                        .unwrap_or_else(|_| "desconocido".to_string());

                    debug!("Conexión aceptada desde {}", peer);

                    thread::spawn(move || {
                        if let Err(e) = Server::handle_connection(stream, router) {
                            warn!("Error atendiendo la conexión de {}: {}", peer, e);
                        }
                    });
                }
                Err(e) => {
                    error!("Error aceptando conexión: {}", e);
                }
            }
        }

        Ok(())
    }

    /// Atiende una conexión: lee una vez, enruta y responde
    ///
    /// Una conexión que cierra sin enviar datos no recibe respuesta. Un
    /// request que no se puede parsear recibe la respuesta fija de
    /// [`PARSE_ERROR_RESPONSE`].
    fn handle_connection(mut stream: TcpStream, router: Arc<Router>) -> io::Result<()> {
        let mut buffer = [0u8; READ_BUFFER_SIZE];
        let bytes_read = stream.read(&mut buffer)?;

        if bytes_read == 0 {
            debug!("Conexión cerrada sin enviar datos");
            return Ok(());
        }

        let response_bytes = match Request::parse(&buffer[..bytes_read]) {
            Ok(request) => {
                let response = router.route(&request);

                if response.status().is_success() {
                    info!(
                        "{} {} -> {}",
                        request.method(),
                        request.target(),
                        response.status()
                    );
                } else {
                    warn!(
                        "{} {} -> {}",
                        request.method(),
                        request.target(),
                        response.status()
                    );
                }

                response.to_bytes()
            }
            Err(e) => {
                warn!("Request ilegible: {}", e);
                PARSE_ERROR_RESPONSE.to_vec()
            }
        };

        stream.write_all(&response_bytes)?;
        stream.flush()?;

        // El stream se cierra al salir del scope
        Ok(())
    }
}
