#![allow(dead_code)]
use std::net::SocketAddr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, UdpSocket};
use tokio::task::JoinHandle;

pub const TYPE_A: u16 = 1;
pub const TYPE_CNAME: u16 = 5;
pub const TYPE_TXT: u16 = 16;

#[derive(Debug, Clone)]
pub struct MockRecord {
    pub record_type: u16,
    pub rdata: Vec<u8>,
}

impl MockRecord {
    /// TXT record made of one character-string per entry.
    pub fn txt(strings: &[&str]) -> Self {
        let mut rdata = Vec::new();
        for s in strings {
            rdata.push(s.len() as u8);
            rdata.extend_from_slice(s.as_bytes());
        }
        Self::txt_raw(rdata)
    }

    pub fn txt_raw(rdata: Vec<u8>) -> Self {
        Self {
            record_type: TYPE_TXT,
            rdata,
        }
    }

    pub fn a(octets: [u8; 4]) -> Self {
        Self {
            record_type: TYPE_A,
            rdata: octets.to_vec(),
        }
    }
}

#[derive(Debug, Clone)]
pub enum MockReply {
    Answers(Vec<MockRecord>),
    Rcode(u8),
    /// Sent verbatim apart from the ID, which is copied from the query.
    Raw(Vec<u8>),
    WrongId(Vec<MockRecord>),
    Silent,
}

pub struct MockDnsServer {
    addr: SocketAddr,
    queries: Arc<AtomicUsize>,
    tasks: Vec<JoinHandle<()>>,
}

impl MockDnsServer {
    /// UDP-only server answering every query with `reply`.
    pub async fn start(reply: MockReply) -> Self {
        let socket = UdpSocket::bind("127.0.0.1:0").await.unwrap();
        let addr = socket.local_addr().unwrap();
        let queries = Arc::new(AtomicUsize::new(0));

        let task = tokio::spawn(Self::serve_udp(socket, reply, false, queries.clone()));

        Self {
            addr,
            queries,
            tasks: vec![task],
        }
    }

    /// Answers UDP with an empty TC response and serves `reply` over TCP on
    /// the same port.
    pub async fn start_truncating(reply: MockReply) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let socket = UdpSocket::bind(addr).await.unwrap();
        let queries = Arc::new(AtomicUsize::new(0));

        let udp = tokio::spawn(Self::serve_udp(socket, reply.clone(), true, queries.clone()));
        let tcp = tokio::spawn(Self::serve_tcp(listener, reply, queries.clone()));

        Self {
            addr,
            queries,
            tasks: vec![udp, tcp],
        }
    }

    pub fn addr(&self) -> SocketAddr {
        self.addr
    }

    pub fn query_count(&self) -> usize {
        self.queries.load(Ordering::SeqCst)
    }

    async fn serve_udp(
        socket: UdpSocket,
        reply: MockReply,
        truncate: bool,
        queries: Arc<AtomicUsize>,
    ) {
        let mut buf = vec![0u8; 512];
        loop {
            let Ok((len, peer)) = socket.recv_from(&mut buf).await else {
                break;
            };
            queries.fetch_add(1, Ordering::SeqCst);
            if let Some(response) = build_response(&buf[..len], &reply, truncate) {
                let _ = socket.send_to(&response, peer).await;
            }
        }
    }

    async fn serve_tcp(listener: TcpListener, reply: MockReply, queries: Arc<AtomicUsize>) {
        loop {
            let Ok((mut stream, _)) = listener.accept().await else {
                break;
            };
            queries.fetch_add(1, Ordering::SeqCst);

            let mut len_buf = [0u8; 2];
            if stream.read_exact(&mut len_buf).await.is_err() {
                continue;
            }
            let mut query = vec![0u8; u16::from_be_bytes(len_buf) as usize];
            if stream.read_exact(&mut query).await.is_err() {
                continue;
            }

            if let Some(response) = build_response(&query, &reply, false) {
                let _ = stream
                    .write_all(&(response.len() as u16).to_be_bytes())
                    .await;
                let _ = stream.write_all(&response).await;
            }
        }
    }
}

impl Drop for MockDnsServer {
    fn drop(&mut self) {
        for task in &self.tasks {
            task.abort();
        }
    }
}

fn question_end(query: &[u8]) -> usize {
    let mut pos = 12;
    while pos < query.len() && query[pos] != 0 {
        pos += 1 + query[pos] as usize;
    }
    (pos + 1 + 4).min(query.len())
}

fn build_response(query: &[u8], reply: &MockReply, truncate: bool) -> Option<Vec<u8>> {
    if query.len() < 12 {
        return None;
    }

    let (records, rcode, id_flip) = match reply {
        MockReply::Silent => return None,
        MockReply::Raw(bytes) => {
            let mut response = bytes.clone();
            if response.len() >= 2 {
                response[0..2].copy_from_slice(&query[0..2]);
            }
            return Some(response);
        }
        MockReply::Answers(records) => (records.as_slice(), 0u8, false),
        MockReply::WrongId(records) => (records.as_slice(), 0u8, true),
        MockReply::Rcode(code) => (&[][..], *code, false),
    };
    let records: &[MockRecord] = if truncate { &[] } else { records };

    let mut response = Vec::with_capacity(512);

    // The truncated UDP leg always carries the right ID.
    let mut id = [query[0], query[1]];
    if id_flip && !truncate {
        id[1] ^= 0xff;
    }
    response.extend_from_slice(&id);

    response.push(if truncate { 0x83 } else { 0x81 });
    response.push(0x80 | (rcode & 0x0f));

    response.extend_from_slice(&query[4..6]);
    response.extend_from_slice(&(records.len() as u16).to_be_bytes());
    response.extend_from_slice(&[0x00, 0x00]);
    response.extend_from_slice(&[0x00, 0x00]);

    response.extend_from_slice(&query[12..question_end(query)]);

    for record in records {
        response.extend_from_slice(&[0xc0, 0x0c]);
        response.extend_from_slice(&record.record_type.to_be_bytes());
        response.extend_from_slice(&[0x00, 0x01]);
        response.extend_from_slice(&[0x00, 0x00, 0x0e, 0x10]);
        response.extend_from_slice(&(record.rdata.len() as u16).to_be_bytes());
        response.extend_from_slice(&record.rdata);
    }

    Some(response)
}
