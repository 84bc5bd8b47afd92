use crate::name_server::NameServer;
use crate::type_expression::DEFAULT_TYPE_EXPRESSION;

/// Settings that persist across the commands of one interactive session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionState {
    pub server: NameServer,
    pub type_expression: String,
    pub recursion_desired: bool,
}

impl SessionState {
    pub fn new(server: NameServer) -> Self {
        Self {
            server,
            type_expression: DEFAULT_TYPE_EXPRESSION.to_string(),
            recursion_desired: false,
        }
    }

    pub fn with_type_expression(mut self, type_expression: impl Into<String>) -> Self {
        self.type_expression = type_expression.into();
        self
    }

    pub fn with_recursion(mut self, recursion_desired: bool) -> Self {
        self.recursion_desired = recursion_desired;
        self
    }

    pub fn port(&self) -> u16 {
        self.server.port()
    }

    /// Copy of this state aimed at another server, for one-shot overrides.
    pub fn with_server(&self, server: NameServer) -> Self {
        Self {
            server,
            ..self.clone()
        }
    }
}
