//! `lb-client` — request/response exchange with the remote simulation.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                     |
//! |---------------|--------------------------------------------------------------|
//! | [`transport`] | `Transport` trait, `HttpTransport` (blocking reqwest)        |
//! | [`wire`]      | serde request/reply structs and conversion to `lb-core` types |
//! | [`session`]   | `Session` — open, submit, turn counter, retries              |
//! | [`config`]    | `ClientConfig`, `RetryPolicy`, `SessionParams`               |
//! | [`error`]     | `ClientError`, `TransportError`, `Call`, `ClientResult<T>`   |
//!
//! # Error taxonomy
//!
//! - **Transport** failures (no reply, timeout, 5xx) are retried with backoff
//!   per [`RetryPolicy`]; once the budget is spent they surface as
//!   [`ClientError::Transport`].
//! - **Protocol** failures (reply not shaped like a state, or inconsistent
//!   with the session) surface immediately as [`ClientError::Protocol`].
//! - **Application** errors reported by the service in the reply's `errors`
//!   list are logged and left on the returned state.  They never fail a call.
//!
//! # Quick-start
//!
//! ```rust,ignore
//! let config = ClientConfig::default();
//! let transport = HttpTransport::new(&config)?;
//! let (mut session, state) = Session::open(transport, &params, config.retry)?;
//! let next = session.submit(&commands)?;
//! ```

pub mod config;
pub mod error;
pub mod session;
pub mod transport;
pub mod wire;


pub use config::{ClientConfig, DEFAULT_API_URL, RetryPolicy, SessionParams};
pub use error::{Call, ClientError, ClientResult, TransportError};
pub use session::Session;
pub use transport::{HttpTransport, Transport};
