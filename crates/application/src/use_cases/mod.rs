pub mod batch;
pub mod diagnostics;
pub mod lookup;
pub mod session;

pub use batch::{BatchLookup, BatchRequest};
pub use diagnostics::{DiagnosticsReport, RunDiagnosticsUseCase};
pub use lookup::LookupUseCase;
pub use session::{InteractiveSession, SessionCommand, Transition};
