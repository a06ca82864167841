pub mod pb {
    include!("pb/mod.rs");

    pub(crate) const FILE_DESCRIPTOR_SET: &[u8] =
        tonic::include_file_descriptor_set!("contextengine_descriptor");
}

use std::net::SocketAddr;

use pb::contextengine::v1::context_engine_server::{ContextEngine, ContextEngineServer};
use pb::contextengine::v1::{ProcessTextRequest, ProcessTextResponse};
use thiserror::Error;
use tokio::net::TcpListener;
use tokio_stream::wrappers::TcpListenerStream;
use tonic::transport::Server;
use tonic::{Request, Response, Status};
use tracing::instrument;

/// Errors that take the whole server down. Per-call failures never show up
/// here; tonic reports those to the caller as gRPC statuses.
#[derive(Debug, Error)]
pub enum ServerError {
    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: SocketAddr,
        source: std::io::Error,
    },
    #[error("failed to build reflection service: {0}")]
    Reflection(#[from] tonic_reflection::server::Error),
    #[error("gRPC server terminated: {0}")]
    Serve(#[from] tonic::transport::Error),
}

/// Implements `contextengine.v1.ContextEngine`.
///
/// Stateless: every call is independent, nothing is shared across calls.
#[derive(Debug, Default)]
pub struct ContextEngineService;

#[tonic::async_trait]
impl ContextEngine for ContextEngineService {
    #[instrument(skip_all, fields(text_len))]
    async fn process_text(
        &self,
        request: Request<ProcessTextRequest>,
    ) -> Result<Response<ProcessTextResponse>, Status> {
        let text = request.into_inner().text;
        tracing::Span::current().record("text_len", text.len());
        tracing::info!("received: {text}");

        Ok(Response::new(ProcessTextResponse {
            processed_text: format!("Echo: {text}"),
        }))
    }
}

/// Acquires the TCP listener for the service.
///
/// Kept separate from [`serve`] so startup failures surface as
/// [`ServerError::Bind`] and so tests can bind port 0 and read back the
/// ephemeral port before serving.
pub async fn bind(addr: SocketAddr) -> Result<TcpListener, ServerError> {
    let listener = TcpListener::bind(addr)
        .await
        .map_err(|source| ServerError::Bind { addr, source })?;
    let local_addr = listener
        .local_addr()
        .map_err(|source| ServerError::Bind { addr, source })?;

    tracing::info!("server listening at {local_addr}");
    Ok(listener)
}

/// Serves `ContextEngine` (plus gRPC server reflection) on a listener
/// obtained from [`bind`], until the transport fails. There is no graceful
/// shutdown; the process runs until it is killed.
pub async fn serve(listener: TcpListener) -> Result<(), ServerError> {
    let reflection_service = tonic_reflection::server::Builder::configure()
        .register_encoded_file_descriptor_set(pb::FILE_DESCRIPTOR_SET)
        .build()?;

    Server::builder()
        .add_service(ContextEngineServer::new(ContextEngineService::default()))
        .add_service(reflection_service)
        .serve_with_incoming(TcpListenerStream::new(listener))
        .await?;

    Ok(())
}
