//! `SETINPREF` over a raw TCP connection.
//!
//! The message goes out as five writes (header, local prefixes, separator,
//! preferences, terminator); a failure names the write that broke. Nothing
//! is read back and the stream is closed on every path.

use async_trait::async_trait;
use rpp_application::ports::PreferenceAdvertiser;
use rpp_domain::{
    AdvertiseStage, ControllerAddress, DomainError, PreferenceMessage, DEFAULT_CONTROLLER_PORT,
};
use std::net::{IpAddr, SocketAddr};
use tokio::io::{AsyncWrite, AsyncWriteExt};
use tokio::net::{TcpSocket, TcpStream};
use tracing::debug;

pub struct TcpPreferenceAdvertiser {
    port: u16,
}

impl Default for TcpPreferenceAdvertiser {
    fn default() -> Self {
        Self::new(DEFAULT_CONTROLLER_PORT)
    }
}

impl TcpPreferenceAdvertiser {
    pub fn new(port: u16) -> Self {
        Self { port }
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    async fn server_addr(&self, controller: &ControllerAddress) -> Result<SocketAddr, DomainError> {
        if let Ok(ip) = controller.as_str().parse::<IpAddr>() {
            return Ok(SocketAddr::new(ip, self.port));
        }

        let unresolvable = |reason: String| DomainError::ControllerAddressUnresolvable {
            address: controller.to_string(),
            reason,
        };

        let mut addrs = tokio::net::lookup_host((controller.as_str(), self.port))
            .await
            .map_err(|e| unresolvable(e.to_string()))?;

        addrs
            .next()
            .ok_or_else(|| unresolvable("no addresses returned".to_string()))
    }

    async fn connect(&self, server: SocketAddr) -> Result<TcpStream, DomainError> {
        let socket = if server.is_ipv4() {
            TcpSocket::new_v4()
        } else {
            TcpSocket::new_v6()
        };
        let socket = socket.map_err(|e| DomainError::SocketFailed(e.to_string()))?;

        socket
            .connect(server)
            .await
            .map_err(|e| DomainError::ConnectFailed {
                server: server.to_string(),
                reason: e.to_string(),
            })
    }
}

#[async_trait]
impl PreferenceAdvertiser for TcpPreferenceAdvertiser {
    async fn advertise(
        &self,
        controller: &ControllerAddress,
        message: &PreferenceMessage,
    ) -> Result<(), DomainError> {
        let server = self.server_addr(controller).await?;
        let mut stream = self.connect(server).await?;

        debug!(server = %server, "Connected to RDE controller");

        let sent = send_segments(&mut stream, message, &server.to_string()).await;

        if let Err(e) = stream.shutdown().await {
            debug!(server = %server, error = %e, "Controller connection shutdown failed");
        }

        sent
    }
}

/// Writes every segment of `message` in order, attributing a failure to the
/// stage whose write broke.
pub async fn send_segments<W>(
    writer: &mut W,
    message: &PreferenceMessage,
    server: &str,
) -> Result<(), DomainError>
where
    W: AsyncWrite + Unpin,
{
    let send_failed = |stage: AdvertiseStage, e: std::io::Error| DomainError::SendFailed {
        server: server.to_string(),
        stage,
        reason: e.to_string(),
    };

    for segment in message.segments() {
        writer
            .write_all(&segment.bytes)
            .await
            .map_err(|e| send_failed(segment.stage, e))?;

        debug!(stage = %segment.stage, bytes = segment.bytes.len(), "Segment sent");
    }

    writer
        .flush()
        .await
        .map_err(|e| send_failed(AdvertiseStage::Terminator, e))
}
