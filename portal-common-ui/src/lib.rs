// File: portal-common-ui/src/lib.rs
//
// UI-agnostic client logic for the student portal: the REST client, the
// persisted session store, and the command handlers shared by any frontend.

pub mod api_client;
pub mod commands;
pub mod session_store;

pub use api_client::ApiClient;
pub use commands::{CommandError, CommandResult};
pub use session_store::SessionStore;
