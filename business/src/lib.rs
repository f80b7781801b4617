//! Members roster domain: the table model, its fetch command and configuration.

mod config;
mod error;
mod fetch_members;
mod member;
mod members_table;

pub use config::{DEFAULT_MEMBERS_URL, RosterConfig};
pub use error::{EMPTY_SELECTION_MESSAGE, FetchError, TableError};
pub use fetch_members::{
    FetchMembersCommand, MembersFetchState, members_from_response, parse_members,
};
pub use member::{Member, MemberField, MemberId, MemberPatch};
pub use members_table::{MembersTable, PAGE_SIZE};
