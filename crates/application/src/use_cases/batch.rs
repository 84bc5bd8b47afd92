use super::lookup::LookupUseCase;
use ferrous_nslookup_domain::{NameServer, SessionState};
use std::io::{self, Write};
use tracing::warn;

/// Arguments of a single non-interactive lookup.
#[derive(Debug, Clone)]
pub struct BatchRequest {
    pub target: String,
    pub server: Option<String>,
    pub type_expression: String,
    pub recursion_desired: bool,
}

pub struct BatchLookup {
    lookup: LookupUseCase,
    default_server: NameServer,
}

impl BatchLookup {
    pub fn new(lookup: LookupUseCase, default_server: NameServer) -> Self {
        Self {
            lookup,
            default_server,
        }
    }

    pub async fn run<W: Write>(&mut self, request: BatchRequest, out: &mut W) -> io::Result<()> {
        let server = match request.server.as_deref() {
            Some(server) => match server.parse::<NameServer>() {
                Ok(server) => server,
                Err(e) => {
                    warn!(server = %server, error = %e, "Rejected server argument");
                    writeln!(out, "Error: {}", e)?;
                    return Ok(());
                }
            },
            None => self.default_server.clone(),
        };

        let session = SessionState::new(server)
            .with_type_expression(request.type_expression)
            .with_recursion(request.recursion_desired);

        self.lookup.execute(&request.target, &session, out).await?;
        Ok(())
    }
}
