use async_trait::async_trait;
use hickory_proto::op::{Header, ResponseCode};
use hickory_proto::rr::RData;
use rpp_application::ports::ControllerResolver;
use rpp_domain::{extract_controller, ControllerLookup, DomainError, ReverseDnsName};
use std::net::SocketAddr;
use tracing::{debug, warn};

use super::answer_parser::{read_header, ResponseView};
use super::message_builder::MessageBuilder;
use super::nameservers::NameserverSettings;
use super::transport::tcp::TcpTransport;
use super::transport::udp::UdpTransport;
use super::transport::{DnsTransport, TransportResponse};

/// Finds RDE controllers through `RDE:` TXT records, querying the
/// configured nameservers like a system stub resolver.
pub struct DnsControllerResolver {
    settings: NameserverSettings,
}

impl DnsControllerResolver {
    pub fn new(settings: NameserverSettings) -> Self {
        Self { settings }
    }

    /// Runs the query against each nameserver for the configured number of
    /// rounds. `None` means no usable response arrived.
    async fn query(&self, reverse_name: &str) -> Result<Option<(Header, Vec<u8>)>, DomainError> {
        let (id, query) = MessageBuilder::build_txt_query(reverse_name)?;

        for attempt in 1..=self.settings.attempts {
            for server in &self.settings.nameservers {
                let udp = UdpTransport::new(*server);
                let response = match udp.send(&query, self.settings.timeout).await {
                    Ok(response) => response,
                    Err(e) => {
                        debug!(server = %server, attempt, error = %e, "TXT query attempt failed");
                        continue;
                    }
                };

                let Some(header) = accept_response(server, id, &response) else {
                    continue;
                };

                if !header.truncated() {
                    return Ok(Some((header, response.bytes)));
                }

                debug!(server = %server, "UDP response truncated, retrying over TCP");
                let tcp = TcpTransport::new(*server);
                let response = match tcp.send(&query, self.settings.timeout).await {
                    Ok(response) => response,
                    Err(e) => {
                        debug!(server = %server, attempt, error = %e, "TCP fallback failed");
                        continue;
                    }
                };

                if let Some(header) = accept_response(server, id, &response) {
                    return Ok(Some((header, response.bytes)));
                }
            }
        }

        Ok(None)
    }
}

/// Header of `response` if it answers query `id`. Runt messages and
/// mismatched IDs are dropped so the next server gets a chance.
fn accept_response(server: &SocketAddr, id: u16, response: &TransportResponse) -> Option<Header> {
    let header = match read_header(&response.bytes) {
        Ok(header) => header,
        Err(e) => {
            debug!(
                server = %server,
                protocol = response.protocol_used,
                error = %e,
                "Discarding unreadable response"
            );
            return None;
        }
    };

    if header.id() != id {
        warn!(
            server = %server,
            protocol = response.protocol_used,
            expected = id,
            received = header.id(),
            "Discarding response with mismatched ID"
        );
        return None;
    }

    debug!(
        server = %server,
        protocol = response.protocol_used,
        "TXT response received"
    );
    Some(header)
}

#[async_trait]
impl ControllerResolver for DnsControllerResolver {
    async fn resolve(
        &self,
        reverse_name: &ReverseDnsName,
        capacity: usize,
    ) -> Result<ControllerLookup, DomainError> {
        debug!(reverse_name = %reverse_name, "Performing TXT lookup");

        // A failed query reads like an absent record, as with res_query.
        let Some((header, bytes)) = self.query(reverse_name.as_str()).await? else {
            debug!(reverse_name = %reverse_name, "TXT lookup got no response");
            return Ok(ControllerLookup::NotFound);
        };

        let rcode = header.response_code();
        if rcode != ResponseCode::NoError {
            debug!(reverse_name = %reverse_name, rcode = ?rcode, "TXT lookup returned an error code");
            return Ok(ControllerLookup::NotFound);
        }

        let view = ResponseView::parse(&bytes)?;

        if view.answer_count() == 0 {
            debug!(reverse_name = %reverse_name, "TXT lookup returned no records");
            return Ok(ControllerLookup::NotFound);
        }

        for record in view.answers() {
            let record = record?;
            let RData::TXT(txt) = record.data() else {
                continue;
            };
            if let Some(controller) = extract_controller(txt.txt_data(), capacity)? {
                debug!(
                    reverse_name = %reverse_name,
                    controller = %controller,
                    "RDE record found"
                );
                return Ok(ControllerLookup::Found(controller));
            }
        }

        debug!(reverse_name = %reverse_name, "No TXT record carries the RDE tag");
        Ok(ControllerLookup::NotFound)
    }
}
