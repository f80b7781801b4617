//! Fetch-members command + status state.
//!
//! Fetching is a side effect (network IO), so it lives in a manual-only
//! command instead of anywhere that could run implicitly:
//! - `FetchMembersCommand` performs the GET and, on success, loads the result
//!   into `MembersTable` through the `Updater`.
//! - `MembersFetchState` records how the last fetch went, for the loading
//!   indicator and diagnostics.
//!
//! ## How to use
//! 1) Register once during app setup:
//!    - `ctx.add_state(RosterConfig::default());`
//!    - `ctx.add_state(MembersTable::default());`
//!    - `ctx.add_state(MembersFetchState::default());`
//!    - `ctx.record_command(FetchMembersCommand);`
//!
//! 2) Dispatch at startup: `ctx.enqueue_command::<FetchMembersCommand>()`,
//!    then `ctx.flush_commands()`; later frames call `ctx.sync()` to apply the
//!    result.

use std::any::Any;

use chrono::{DateTime, Utc};
use log::{error, info};
use roster_states::{Command, State, StateCtx, Updater};

use crate::config::RosterConfig;
use crate::error::FetchError;
use crate::member::Member;
use crate::members_table::MembersTable;

/// Outcome of the member list fetch.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum MembersFetchState {
    /// No fetch attempted yet.
    #[default]
    Idle,
    /// Request in flight.
    Pending,
    /// The table was loaded with `count` members.
    Loaded {
        count: usize,
        fetched_at: DateTime<Utc>,
    },
    /// The fetch failed; the table is left as it was.
    Failed(FetchError),
}

impl MembersFetchState {
    pub fn is_pending(&self) -> bool {
        matches!(self, Self::Pending)
    }

    pub fn is_loaded(&self) -> bool {
        matches!(self, Self::Loaded { .. })
    }

    pub fn error(&self) -> Option<&FetchError> {
        match self {
            Self::Failed(err) => Some(err),
            _ => None,
        }
    }
}

impl State for MembersFetchState {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

/// Decode the data source's JSON array.
pub fn parse_members(bytes: &[u8]) -> Result<Vec<Member>, FetchError> {
    serde_json::from_slice(bytes).map_err(|e| FetchError::Parse(e.to_string()))
}

/// Turn an HTTP response into members, rejecting non-2xx statuses.
pub fn members_from_response(response: &ehttp::Response) -> Result<Vec<Member>, FetchError> {
    if !response.ok {
        return Err(FetchError::Status {
            status: response.status,
            status_text: response.status_text.clone(),
        });
    }

    parse_members(&response.bytes)
}

/// Manual-only command that loads the member list once.
///
/// No retry: a failure is logged and recorded in `MembersFetchState`.
#[derive(Default, Debug)]
pub struct FetchMembersCommand;

impl Command for FetchMembersCommand {
    fn run(&self, ctx: &StateCtx, updater: Updater) {
        let url = ctx.state::<RosterConfig>().members_url().to_owned();

        info!("FetchMembersCommand: Fetching members from {url}");
        updater.set(MembersFetchState::Pending);

        let request = ehttp::Request::get(&url);
        ehttp::fetch(request, move |result| {
            match result
                .map_err(FetchError::Request)
                .and_then(|response| members_from_response(&response))
            {
                Ok(members) => {
                    info!(
                        "FetchMembersCommand: Fetched {} members successfully",
                        members.len()
                    );
                    updater.apply(move |ctx| {
                        let loaded = ctx.update::<MembersTable>(|table| table.load(members));
                        if let Err(err) = loaded {
                            error!("FetchMembersCommand: {err}");
                            return;
                        }
                        let count = ctx.state::<MembersTable>().members().len();
                        ctx.add_state(MembersFetchState::Loaded {
                            count,
                            fetched_at: Utc::now(),
                        });
                    });
                }
                Err(err) => {
                    error!("FetchMembersCommand: Error fetching data: {err}");
                    updater.set(MembersFetchState::Failed(err));
                }
            }
        });
    }
}
