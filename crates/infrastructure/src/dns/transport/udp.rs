//! UDP Transport for DNS queries (RFC 1035 §4.2.1)
//!
//! Messages are sent as-is (no framing). If the response has the TC
//! (truncated) bit set, the caller retries via TCP.

use super::{DnsTransport, TransportResponse};
use async_trait::async_trait;
use rpp_domain::DomainError;
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr, SocketAddr};
use std::time::Duration;
use tokio::net::UdpSocket;
use tracing::{debug, warn};

/// Maximum UDP DNS response size accepted
const MAX_UDP_RESPONSE_SIZE: usize = 4096;

/// DNS over UDP transport
pub struct UdpTransport {
    server_addr: SocketAddr,
}

impl UdpTransport {
    pub fn new(server_addr: SocketAddr) -> Self {
        Self { server_addr }
    }

    fn bind_addr(&self) -> SocketAddr {
        let ip = if self.server_addr.is_ipv4() {
            IpAddr::V4(Ipv4Addr::UNSPECIFIED)
        } else {
            IpAddr::V6(Ipv6Addr::UNSPECIFIED)
        };
        SocketAddr::new(ip, 0)
    }
}

#[async_trait]
impl DnsTransport for UdpTransport {
    async fn send(
        &self,
        message_bytes: &[u8],
        timeout: Duration,
    ) -> Result<TransportResponse, DomainError> {
        let socket = UdpSocket::bind(self.bind_addr()).await.map_err(|e| {
            DomainError::QueryFailed(format!("Failed to bind UDP socket: {}", e))
        })?;

        socket.connect(self.server_addr).await.map_err(|e| {
            DomainError::QueryFailed(format!(
                "Failed to connect UDP socket to {}: {}",
                self.server_addr, e
            ))
        })?;

        let bytes_sent = tokio::time::timeout(timeout, socket.send(message_bytes))
            .await
            .map_err(|_| {
                DomainError::QueryFailed(format!(
                    "Timeout sending UDP query to {}",
                    self.server_addr
                ))
            })?
            .map_err(|e| {
                DomainError::QueryFailed(format!(
                    "Failed to send UDP query to {}: {}",
                    self.server_addr, e
                ))
            })?;

        debug!(
            server = %self.server_addr,
            bytes_sent = bytes_sent,
            "UDP query sent"
        );

        let mut recv_buf = vec![0u8; MAX_UDP_RESPONSE_SIZE];

        let bytes_received = tokio::time::timeout(timeout, socket.recv(&mut recv_buf))
            .await
            .map_err(|_| {
                DomainError::QueryFailed(format!(
                    "Timeout waiting for UDP response from {}",
                    self.server_addr
                ))
            })?
            .map_err(|e| {
                DomainError::QueryFailed(format!(
                    "Failed to receive UDP response from {}: {}",
                    self.server_addr, e
                ))
            })?;

        if bytes_received == MAX_UDP_RESPONSE_SIZE {
            warn!(
                server = %self.server_addr,
                "UDP response filled the receive buffer"
            );
        }

        recv_buf.truncate(bytes_received);

        debug!(
            server = %self.server_addr,
            bytes_received = bytes_received,
            "UDP response received"
        );

        Ok(TransportResponse {
            bytes: recv_buf,
            protocol_used: "UDP",
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_udp_transport_creation() {
        let addr: SocketAddr = "192.0.2.53:53".parse().unwrap();
        let transport = UdpTransport::new(addr);
        assert_eq!(transport.server_addr, addr);
    }

    #[test]
    fn test_bind_addr_matches_family() {
        let v4 = UdpTransport::new("192.0.2.53:53".parse().unwrap());
        assert!(v4.bind_addr().is_ipv4());

        let v6 = UdpTransport::new("[2001:db8::53]:53".parse().unwrap());
        assert!(v6.bind_addr().is_ipv6());
    }
}
