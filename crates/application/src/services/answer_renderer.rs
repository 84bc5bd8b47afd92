use ferrous_nslookup_domain::{DnsRecord, LogicalResponse, QueryTarget, SoaData};
use std::io::{self, Write};

/// Prints a merged lookup response in the classic nslookup layout.
#[derive(Debug, Default, Clone, Copy)]
pub struct AnswerRenderer;

impl AnswerRenderer {
    pub fn new() -> Self {
        Self
    }

    /// Writes `response` to `out`.
    ///
    /// Records are labelled with the name of the last question sent, so a
    /// PTR lookup shows its `in-addr.arpa` name. Sub-query failures are
    /// listed last as `Error: <cause>`.
    pub fn render<W: Write>(
        &self,
        out: &mut W,
        response: &LogicalResponse,
        target: &QueryTarget,
    ) -> io::Result<()> {
        let name = response
            .last_question
            .as_ref()
            .map(|q| q.domain.as_ref())
            .unwrap_or(target.name.as_ref());

        if response.has_response() {
            if response.is_non_existent() {
                writeln!(
                    out,
                    "*** UnKnown can't find {}: Non-existent domain",
                    name
                )?;
            } else {
                self.render_answers(out, response, name)?;
                self.render_authority(out, response, name)?;
            }
        }

        for error in &response.failures {
            writeln!(out, "Error: {}", error)?;
        }

        Ok(())
    }

    fn render_answers<W: Write>(
        &self,
        out: &mut W,
        response: &LogicalResponse,
        name: &str,
    ) -> io::Result<()> {
        let mut header_printed = false;

        for record in &response.answers {
            if record.is_address() && !header_printed {
                writeln!(out, "Name:  {}", name)?;
                if response.answers.len() > 1 {
                    writeln!(out, "Addresses:")?;
                } else {
                    writeln!(out, "Address:")?;
                }
                header_printed = true;
            }

            match record {
                DnsRecord::A(ip) => writeln!(out, "\t{}", ip)?,
                DnsRecord::AAAA(ip) => writeln!(out, "\t{}", ip)?,
                DnsRecord::CNAME(cname) => {
                    writeln!(out, "{}\tcanonical name = {}", name, cname)?
                }
                DnsRecord::NS(ns) => writeln!(out, "{}\t nameserver = {}", name, ns)?,
                DnsRecord::MX {
                    preference,
                    exchange,
                } => writeln!(
                    out,
                    "{}\tMX preference = {}, mail exchanger = {}",
                    name, preference, exchange
                )?,
                DnsRecord::PTR(ptr) => writeln!(out, "{}\tname = {}", name, ptr)?,
                DnsRecord::TXT(strings) => {
                    writeln!(out, "{}  text = ", name)?;
                    let first = strings.first().map(String::as_str).unwrap_or_default();
                    writeln!(out, "\t\"{}\"", first)?;
                    writeln!(out)?;
                }
                DnsRecord::SRV {
                    priority,
                    weight,
                    port,
                    target,
                } => {
                    writeln!(out, "{}\tSRV service location:", name)?;
                    writeln!(out, "\t  priority       = {}", priority)?;
                    writeln!(out, "\t  weight         = {}", weight)?;
                    writeln!(out, "\t  port           = {}", port)?;
                    writeln!(out, "\t  svr hostname   = {}", target)?;
                }
                DnsRecord::DNSKEY {
                    flags,
                    protocol,
                    algorithm,
                    public_key,
                } => {
                    writeln!(out, "Flags: {}", flags)?;
                    writeln!(out, "Protocol: {}", protocol)?;
                    writeln!(out, "Algorithm: {}", algorithm)?;
                    writeln!(out, "Public Key: {}", public_key)?;
                }
                DnsRecord::SOA(soa) => render_soa(out, soa)?,
                DnsRecord::Other { .. } => {}
            }
        }

        Ok(())
    }

    fn render_authority<W: Write>(
        &self,
        out: &mut W,
        response: &LogicalResponse,
        name: &str,
    ) -> io::Result<()> {
        if response.authority.is_empty() {
            return Ok(());
        }

        writeln!(out, "{}", name)?;
        for record in &response.authority {
            if let DnsRecord::SOA(soa) = record {
                render_soa(out, soa)?;
            }
        }

        Ok(())
    }
}

fn render_soa<W: Write>(out: &mut W, soa: &SoaData) -> io::Result<()> {
    writeln!(out, "\tprimary name server = {}", soa.mname)?;
    writeln!(out, "\tresponsible mail addr = {}", soa.rname)?;
    writeln!(out, "\tserial  = {}", soa.serial)?;
    writeln!(out, "\trefresh = {} ({})", soa.refresh, seconds_to_minutes(soa.refresh))?;
    writeln!(out, "\tretry   = {} ({})", soa.retry, seconds_to_minutes(soa.retry))?;
    writeln!(out, "\texpire  = {} ({})", soa.expire, seconds_to_minutes(soa.expire))?;
    writeln!(
        out,
        "\tdefault TTL = {} ({})",
        soa.minimum,
        seconds_to_minutes(soa.minimum)
    )
}

/// `3600` becomes `60 mins`; the plural only starts above one minute.
fn seconds_to_minutes(seconds: u32) -> String {
    let minutes = seconds / 60;
    let suffix = if minutes > 1 { "s" } else { "" };
    format!("{} min{}", minutes, suffix)
}
