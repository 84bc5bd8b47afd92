use super::wire::{encode, response_to, with_rcode};
use hickory_proto::op::{Message, ResponseCode};
use hickory_proto::rr::Record;
use std::net::SocketAddr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, UdpSocket};
use tokio::sync::oneshot;

/// How the mock server answers every query.
#[derive(Debug, Clone, Default)]
pub struct MockBehavior {
    pub answers: Vec<Record>,
    pub authority: Vec<Record>,
    pub rcode: ResponseCode,
    /// Over UDP, send an empty response with TC set.
    pub truncate_udp: bool,
    /// Answer with a transaction ID that does not match the query.
    pub wrong_id: bool,
}

/// In-process DNS server listening on UDP and TCP on the same local port.
pub struct MockDnsServer {
    addr: SocketAddr,
    udp_queries: Arc<AtomicUsize>,
    tcp_queries: Arc<AtomicUsize>,
    shutdown_tx: Option<oneshot::Sender<()>>,
}

impl MockDnsServer {
    pub async fn start(behavior: MockBehavior) -> Result<Self, std::io::Error> {
        let socket = UdpSocket::bind("127.0.0.1:0").await?;
        let addr = socket.local_addr()?;
        let listener = TcpListener::bind(addr).await?;

        let udp_queries = Arc::new(AtomicUsize::new(0));
        let tcp_queries = Arc::new(AtomicUsize::new(0));
        let (shutdown_tx, mut shutdown_rx) = oneshot::channel();

        let behavior = Arc::new(behavior);
        let udp_count = udp_queries.clone();
        let tcp_count = tcp_queries.clone();

        tokio::spawn(async move {
            let mut buf = vec![0u8; 512];

            loop {
                tokio::select! {
                    _ = &mut shutdown_rx => {
                        break;
                    }
                    result = socket.recv_from(&mut buf) => {
                        if let Ok((len, peer)) = result {
                            udp_count.fetch_add(1, Ordering::SeqCst);
                            let response = Self::build_response(&buf[..len], &behavior, true);
                            let _ = socket.send_to(&response, peer).await;
                        }
                    }
                    result = listener.accept() => {
                        if let Ok((mut stream, _)) = result {
                            tcp_count.fetch_add(1, Ordering::SeqCst);
                            let behavior = behavior.clone();
                            tokio::spawn(async move {
                                let mut len_buf = [0u8; 2];
                                if stream.read_exact(&mut len_buf).await.is_err() {
                                    return;
                                }
                                let mut query = vec![0u8; u16::from_be_bytes(len_buf) as usize];
                                if stream.read_exact(&mut query).await.is_err() {
                                    return;
                                }
                                let response = Self::build_response(&query, &behavior, false);
                                let _ = stream
                                    .write_all(&(response.len() as u16).to_be_bytes())
                                    .await;
                                let _ = stream.write_all(&response).await;
                            });
                        }
                    }
                }
            }
        });

        Ok(Self {
            addr,
            udp_queries,
            tcp_queries,
            shutdown_tx: Some(shutdown_tx),
        })
    }

    pub fn addr(&self) -> SocketAddr {
        self.addr
    }

    pub fn udp_queries(&self) -> usize {
        self.udp_queries.load(Ordering::SeqCst)
    }

    pub fn tcp_queries(&self) -> usize {
        self.tcp_queries.load(Ordering::SeqCst)
    }

    fn build_response(query: &[u8], behavior: &MockBehavior, over_udp: bool) -> Vec<u8> {
        let Ok(query) = Message::from_vec(query) else {
            return vec![];
        };

        let mut message = with_rcode(response_to(&query), behavior.rcode);
        if behavior.wrong_id {
            let mut header = *message.header();
            header.set_id(query.id().wrapping_add(1));
            message.set_header(header);
        }

        if over_udp && behavior.truncate_udp {
            message.set_truncated(true);
            return encode(&message);
        }

        for record in &behavior.answers {
            message.add_answer(record.clone());
        }
        for record in &behavior.authority {
            message.add_name_server(record.clone());
        }
        encode(&message)
    }

    pub fn shutdown(mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}

impl Drop for MockDnsServer {
    fn drop(&mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}
