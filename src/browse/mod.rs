//! Browse module - interactive search session
//!
//! The session is split so the logic stays UI-agnostic:
//!
//! - `command`: Parses input lines into `SessionCommand`s
//! - `session`: `BrowseSession` state and the command reducer
//! - `ui`: Prompt loop wiring a `UserInput` and an `OutputWriter` to the session

pub mod command;
pub mod session;
pub mod ui;

pub use command::{HELP, SessionCommand, SessionError};
pub use session::{BrowseSession, Outcome};
pub use ui::{render_results, run};
