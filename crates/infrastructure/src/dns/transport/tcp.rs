use super::{DnsTransport, TransportResponse};
use async_trait::async_trait;
use ferrous_nslookup_domain::DomainError;
use std::io::ErrorKind;
use std::net::SocketAddr;
use std::time::Duration;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpStream;
use tracing::debug;

const MAX_TCP_MESSAGE_SIZE: usize = 65535;

/// DNS over TCP with the two-byte length prefix, one connection per query.
pub struct TcpTransport {
    server_addr: SocketAddr,
}

impl TcpTransport {
    pub fn new(server_addr: SocketAddr) -> Self {
        Self { server_addr }
    }

    async fn connect(&self, timeout: Duration) -> Result<TcpStream, DomainError> {
        let stream = tokio::time::timeout(timeout, TcpStream::connect(self.server_addr))
            .await
            .map_err(|_| DomainError::TransportTimeout {
                server: self.server_addr.to_string(),
            })?
            .map_err(|e| match e.kind() {
                ErrorKind::ConnectionRefused => DomainError::TransportConnectionRefused {
                    server: self.server_addr.to_string(),
                },
                ErrorKind::ConnectionReset => DomainError::TransportConnectionReset {
                    server: self.server_addr.to_string(),
                },
                _ => DomainError::IoError(format!(
                    "Failed to connect to TCP server {}: {}",
                    self.server_addr, e
                )),
            })?;

        stream.set_nodelay(true).map_err(|e| {
            DomainError::IoError(format!(
                "Failed to set TCP_NODELAY on {}: {}",
                self.server_addr, e
            ))
        })?;

        Ok(stream)
    }
}

#[async_trait]
impl DnsTransport for TcpTransport {
    async fn send(
        &self,
        message_bytes: &[u8],
        timeout: Duration,
    ) -> Result<TransportResponse, DomainError> {
        let mut stream = self.connect(timeout).await?;

        tokio::time::timeout(timeout, send_with_length_prefix(&mut stream, message_bytes))
            .await
            .map_err(|_| DomainError::TransportTimeout {
                server: self.server_addr.to_string(),
            })??;

        debug!(
            server = %self.server_addr,
            message_len = message_bytes.len(),
            "TCP query sent"
        );

        let response_bytes =
            tokio::time::timeout(timeout, read_with_length_prefix(&mut stream))
                .await
                .map_err(|_| DomainError::QueryTimeout)??;

        debug!(
            server = %self.server_addr,
            response_len = response_bytes.len(),
            "TCP response received"
        );

        Ok(TransportResponse {
            bytes: response_bytes,
            protocol_used: "TCP",
        })
    }
}

pub(crate) async fn send_with_length_prefix<S>(
    stream: &mut S,
    message_bytes: &[u8],
) -> Result<(), DomainError>
where
    S: AsyncWriteExt + Unpin,
{
    let length = u16::try_from(message_bytes.len()).map_err(|_| {
        DomainError::InvalidDomainName(format!(
            "DNS message too large for TCP: {} bytes",
            message_bytes.len()
        ))
    })?;

    stream
        .write_all(&length.to_be_bytes())
        .await
        .map_err(|e| DomainError::IoError(format!("Failed to write length prefix: {}", e)))?;
    stream
        .write_all(message_bytes)
        .await
        .map_err(|e| DomainError::IoError(format!("Failed to write DNS message: {}", e)))?;
    stream
        .flush()
        .await
        .map_err(|e| DomainError::IoError(format!("Failed to flush stream: {}", e)))?;

    Ok(())
}

pub(crate) async fn read_with_length_prefix<S>(stream: &mut S) -> Result<Vec<u8>, DomainError>
where
    S: AsyncReadExt + Unpin,
{
    let mut len_buf = [0u8; 2];
    stream
        .read_exact(&mut len_buf)
        .await
        .map_err(|e| DomainError::IoError(format!("Failed to read response length: {}", e)))?;

    let response_len = u16::from_be_bytes(len_buf) as usize;

    if response_len > MAX_TCP_MESSAGE_SIZE {
        return Err(DomainError::InvalidDnsResponse(format!(
            "Response too large: {} bytes (max {})",
            response_len, MAX_TCP_MESSAGE_SIZE
        )));
    }

    let mut response = vec![0u8; response_len];
    stream
        .read_exact(&mut response)
        .await
        .map_err(|e| DomainError::IoError(format!("Failed to read response body: {}", e)))?;

    Ok(response)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_length_prefix_framing() {
        let (mut client, mut server) = tokio::io::duplex(1024);

        send_with_length_prefix(&mut client, &[0xab, 0xcd, 0xef])
            .await
            .unwrap();

        let mut prefix = [0u8; 2];
        server.read_exact(&mut prefix).await.unwrap();
        assert_eq!(prefix, [0x00, 0x03]);

        let mut body = [0u8; 3];
        server.read_exact(&mut body).await.unwrap();
        assert_eq!(body, [0xab, 0xcd, 0xef]);
    }

    #[tokio::test]
    async fn test_read_length_prefixed_message() {
        let (mut client, mut server) = tokio::io::duplex(1024);
        server.write_all(&[0x00, 0x02, 0x12, 0x34]).await.unwrap();

        let message = read_with_length_prefix(&mut client).await.unwrap();
        assert_eq!(message, vec![0x12, 0x34]);
    }

    #[tokio::test]
    async fn test_read_short_message_is_io_error() {
        let (mut client, mut server) = tokio::io::duplex(1024);
        server.write_all(&[0x00, 0x05, 0x01]).await.unwrap();
        drop(server);

        let result = read_with_length_prefix(&mut client).await;
        assert!(matches!(result, Err(DomainError::IoError(_))));
    }
}
