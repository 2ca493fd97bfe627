//! Conversation state machine and orchestration.
//!
//! [`ChatState`] is an immutable snapshot with a closed set of pure
//! transitions; [`ChatSession`] drives it, wiring the API client and the
//! thread store together. The session never surfaces transport or storage
//! errors to callers: failures are rendered into the state as system
//! notices and the conversation stays usable.

pub mod session;
pub mod state;

pub use session::{ChatSession, ERROR_NOTICE};
pub use state::ChatState;
