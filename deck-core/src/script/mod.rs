//! Session action logs: loading and replay.

mod session;

pub use session::{load_session, parse_session_str, Action, SessionScript};
