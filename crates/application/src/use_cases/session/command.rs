/// One parsed line of interactive input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionCommand {
    Exit,
    Help,
    ShowAll,
    SetType(String),
    SetRecurse(bool),
    SetServer(String),
    Lookup {
        target: String,
        server_override: Option<String>,
    },
    Ignore,
}

impl SessionCommand {
    /// Parses a line the way classic nslookup does.
    ///
    /// Trailing spaces are dropped and the line is split on single spaces.
    /// A lone word is a lookup unless it is `exit`, `help` or `?`. With more
    /// words the first one is lower-cased and selects `set`, `server` or a
    /// lookup through the server named by the second word. Lines whose first
    /// or second word is empty are ignored.
    pub fn parse(line: &str) -> Self {
        let line = line.trim_end_matches([' ', '\r', '\n']);
        let parts: Vec<&str> = line.split(' ').collect();

        if let [word] = parts.as_slice() {
            return match word.to_lowercase().as_str() {
                "" => SessionCommand::Ignore,
                "exit" => SessionCommand::Exit,
                "help" | "?" => SessionCommand::Help,
                _ => SessionCommand::Lookup {
                    target: word.to_string(),
                    server_override: None,
                },
            };
        }

        // Leading or doubled spaces leave empty words behind
        if parts[0].is_empty() || parts[1].is_empty() {
            return SessionCommand::Ignore;
        }

        let command = parts[0].to_lowercase();
        match command.as_str() {
            "set" => Self::parse_set(&parts[1].to_lowercase()),
            "server" => SessionCommand::SetServer(parts[1].to_string()),
            "help" | "?" => SessionCommand::Ignore,
            _ => SessionCommand::Lookup {
                target: command,
                server_override: Some(parts[1].to_string()),
            },
        }
    }

    fn parse_set(param: &str) -> Self {
        let pieces: Vec<&str> = param.split('=').collect();
        match pieces.as_slice() {
            ["all"] => SessionCommand::ShowAll,
            ["recurse"] => SessionCommand::SetRecurse(true),
            ["norecurse"] => SessionCommand::SetRecurse(false),
            ["type" | "querytype", value] => SessionCommand::SetType(value.to_string()),
            _ => SessionCommand::Ignore,
        }
    }
}
