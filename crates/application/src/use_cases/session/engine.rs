use super::command::SessionCommand;
use crate::use_cases::lookup::LookupUseCase;
use ferrous_nslookup_domain::{NameServer, SessionState};
use std::io::{self, Write};
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tracing::{debug, warn};

pub const PROMPT: &str = "> ";

pub const HELP_TEXT: &str = "\
NAME\t\t- print info about the host/domain NAME using default server
NAME1 NAME2\t- as above, but use NAME2 as server for this lookup only
help or ?\t- print info on common commands
server NAME\t- make NAME the default server
set OPTION\t- set an option
    all\t\t- print options and current server
    [no]recurse\t- ask for recursive answer to query
    type=X\t- set query type (ex. A,AAAA,A+AAAA,ANY,CNAME,MX,NS,PTR,SOA,SRV)
exit\t\t- exit the program
";

/// What the loop does after a command has been applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    Continue,
    Exit,
}

/// The interactive read-eval-print loop.
pub struct InteractiveSession {
    lookup: LookupUseCase,
    state: SessionState,
}

impl InteractiveSession {
    pub fn new(lookup: LookupUseCase, state: SessionState) -> Self {
        Self { lookup, state }
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    /// Reads commands until `exit` or end of input.
    pub async fn run<R, W>(&mut self, input: R, out: &mut W) -> io::Result<()>
    where
        R: AsyncBufRead + Unpin,
        W: Write,
    {
        let mut lines = input.lines();

        loop {
            write!(out, "{}", PROMPT)?;
            out.flush()?;

            let Some(line) = lines.next_line().await? else {
                debug!("End of input, leaving session");
                break;
            };

            if self.apply(SessionCommand::parse(&line), out).await? == Transition::Exit {
                break;
            }
        }

        Ok(())
    }

    pub async fn apply<W: Write>(
        &mut self,
        command: SessionCommand,
        out: &mut W,
    ) -> io::Result<Transition> {
        match command {
            SessionCommand::Exit => return Ok(Transition::Exit),
            SessionCommand::Help => {
                write!(out, "{}", HELP_TEXT)?;
                writeln!(out)?;
            }
            SessionCommand::ShowAll => {
                writeln!(out, " port={}", self.state.port())?;
                writeln!(out, " type={}", self.state.type_expression)?;
                writeln!(out, " server={}", self.state.server.host())?;
                writeln!(out)?;
            }
            SessionCommand::SetType(expression) => {
                debug!(type_expression = %expression, "Query type changed");
                self.state.type_expression = expression;
            }
            SessionCommand::SetRecurse(recursion_desired) => {
                debug!(recursion_desired, "Recursion flag changed");
                self.state.recursion_desired = recursion_desired;
            }
            SessionCommand::SetServer(server) => match server.parse::<NameServer>() {
                Ok(server) => {
                    debug!(server = %server, "Default server changed");
                    self.state.server = server;
                }
                Err(e) => warn!(server = %server, error = %e, "Ignoring server command"),
            },
            SessionCommand::Lookup {
                target,
                server_override,
            } => {
                match server_override {
                    None => {
                        self.lookup.execute(&target, &self.state, out).await?;
                    }
                    Some(server) => match server.parse::<NameServer>() {
                        Ok(server) => {
                            let one_shot = self.state.with_server(server);
                            self.lookup.execute(&target, &one_shot, out).await?;
                        }
                        Err(e) => writeln!(out, "Error: {}", e)?,
                    },
                }
                writeln!(out)?;
            }
            SessionCommand::Ignore => {}
        }

        Ok(Transition::Continue)
    }
}
