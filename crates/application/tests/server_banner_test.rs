mod helpers;

use ferrous_nslookup_application::services::ServerBanner;
use ferrous_nslookup_domain::{
    DnsRecord, DomainError, ExchangeResponse, NameServer, RecordType, TransportMode,
};
use helpers::MockDnsExchanger;
use std::sync::Arc;

fn ptr(name: &str) -> ExchangeResponse {
    ExchangeResponse::new(vec![DnsRecord::PTR(name.to_string())], vec![])
}

async fn render(banner: &mut ServerBanner, server: &NameServer) -> String {
    let mut out = Vec::new();
    banner.render(&mut out, server).await.unwrap();
    String::from_utf8(out).unwrap()
}

#[tokio::test]
async fn test_banner_asks_the_server_for_its_own_name() {
    let exchanger = Arc::new(MockDnsExchanger::new());
    exchanger.respond("4.3.2.1.in-addr.arpa", RecordType::PTR, ptr("ns.example.net"));
    let mut banner = ServerBanner::new(exchanger.clone());
    let server = NameServer::new("1.2.3.4", 5353);

    let output = render(&mut banner, &server).await;

    assert_eq!(output, "Server:   ns.example.net\nAddress:  1.2.3.4\n\n");
    let calls = exchanger.calls();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].question.domain.as_ref(), "4.3.2.1.in-addr.arpa");
    assert!(calls[0].question.recursion_desired);
    assert_eq!(calls[0].server, server);
}

#[tokio::test]
async fn test_banner_ipv6_server_uses_ip6_arpa() {
    let exchanger = Arc::new(MockDnsExchanger::new());
    let mut banner = ServerBanner::new(exchanger.clone());

    let name = banner.server_name(&"::1".parse().unwrap()).await;

    assert_eq!(name, "UnKnown");
    let calls = exchanger.calls_for(RecordType::PTR);
    assert_eq!(calls.len(), 1);
    assert!(calls[0].question.domain.ends_with(".ip6.arpa"));
}

#[tokio::test]
async fn test_banner_failure_prints_unknown() {
    let exchanger = Arc::new(MockDnsExchanger::new());
    exchanger.fail(
        "8.8.8.8.in-addr.arpa",
        RecordType::PTR,
        DomainError::QueryTimeout,
    );
    let mut banner = ServerBanner::new(exchanger.clone());

    let output = render(&mut banner, &NameServer::new("8.8.8.8", 53)).await;

    assert_eq!(output, "Server:   UnKnown\nAddress:  8.8.8.8\n\n");
}

#[tokio::test]
async fn test_banner_truncated_reply_is_asked_again_over_tcp() {
    let exchanger = Arc::new(MockDnsExchanger::new());
    exchanger.respond(
        "8.8.8.8.in-addr.arpa",
        RecordType::PTR,
        ExchangeResponse::default().truncated(),
    );
    exchanger.respond("8.8.8.8.in-addr.arpa", RecordType::PTR, ptr("dns.google"));
    let mut banner = ServerBanner::new(exchanger.clone());

    let name = banner.server_name(&NameServer::new("8.8.8.8", 53)).await;

    assert_eq!(name, "dns.google");
    let modes: Vec<_> = exchanger.calls().into_iter().map(|c| c.mode).collect();
    assert_eq!(modes, vec![TransportMode::Udp, TransportMode::Tcp]);
}
