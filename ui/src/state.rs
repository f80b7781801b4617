use log::error;
use roster_business::{FetchMembersCommand, MembersFetchState, MembersTable, RosterConfig};
use roster_states::StateCtx;

/// The main application state.
pub struct State {
    /// The state context for business logic.
    pub ctx: StateCtx,
}

impl Default for State {
    fn default() -> Self {
        Self::with_config(load_config())
    }
}

impl State {
    /// State pointed at a custom member list, for tests and local servers.
    pub fn test(members_url: String) -> Self {
        Self::with_config(RosterConfig::new(members_url))
    }

    fn with_config(config: RosterConfig) -> Self {
        let mut ctx = StateCtx::new();

        ctx.add_state(config);
        ctx.add_state(MembersTable::default());
        ctx.add_state(MembersFetchState::default());
        ctx.record_command(FetchMembersCommand);

        Self { ctx }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn load_config() -> RosterConfig {
    RosterConfig::from_env().unwrap_or_else(|err| {
        error!("Failed to read configuration, using defaults: {err:#}");
        RosterConfig::default()
    })
}

#[cfg(target_arch = "wasm32")]
fn load_config() -> RosterConfig {
    RosterConfig::default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_state_points_at_given_url() {
        let state = State::test("http://localhost:9/members.json".to_owned());

        assert_eq!(
            state.ctx.state::<RosterConfig>().members_url(),
            "http://localhost:9/members.json"
        );
        assert!(state.ctx.state::<MembersTable>().members().is_empty());
        assert_eq!(
            *state.ctx.state::<MembersFetchState>(),
            MembersFetchState::Idle
        );
    }
}
