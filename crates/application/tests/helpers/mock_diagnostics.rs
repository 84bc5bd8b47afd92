use async_trait::async_trait;
use ferrous_nslookup_application::ports::{
    EchoReply, InterfaceAddress, InterfaceLister, NetworkProbe,
};
use ferrous_nslookup_domain::DomainError;
use std::net::IpAddr;
use std::sync::Mutex;
use std::time::Duration;

pub struct MockNetworkProbe {
    reply: Result<EchoReply, DomainError>,
    requests: Mutex<Vec<(IpAddr, Vec<u8>)>>,
}

impl MockNetworkProbe {
    pub fn replying(reply: EchoReply) -> Self {
        Self {
            reply: Ok(reply),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn failing(error: DomainError) -> Self {
        Self {
            reply: Err(error),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn requests(&self) -> Vec<(IpAddr, Vec<u8>)> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl NetworkProbe for MockNetworkProbe {
    async fn echo(
        &self,
        target: IpAddr,
        payload: &[u8],
        _timeout: Duration,
    ) -> Result<EchoReply, DomainError> {
        self.requests
            .lock()
            .unwrap()
            .push((target, payload.to_vec()));
        self.reply.clone()
    }
}

pub struct MockInterfaceLister {
    addresses: Result<Vec<InterfaceAddress>, DomainError>,
}

impl MockInterfaceLister {
    pub fn with_addresses(addresses: Vec<InterfaceAddress>) -> Self {
        Self {
            addresses: Ok(addresses),
        }
    }

    pub fn failing(error: DomainError) -> Self {
        Self {
            addresses: Err(error),
        }
    }
}

impl InterfaceLister for MockInterfaceLister {
    fn addresses(&self) -> Result<Vec<InterfaceAddress>, DomainError> {
        self.addresses.clone()
    }
}
