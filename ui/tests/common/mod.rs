use std::time::Duration;

use egui_kittest::Harness;
use roster_business::MembersFetchState;
use roster_ui::RosterApp;
use roster_ui::state::State;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[allow(unused)]
pub const DEFAULT_NETWORK_WAIT_MS: u64 = 50;

pub const MEMBERS_PATH: &str = "/members.json";

pub struct TestCtx<'a, T = State> {
    _mock_server: MockServer,
    harness: Harness<'a, T>,
}

impl<'a, T> TestCtx<'a, T> {
    pub fn harness_mut(&mut self) -> &mut Harness<'a, T> {
        &mut self.harness
    }

    #[allow(unused)]
    pub fn harness(&self) -> &Harness<'a, T> {
        &self.harness
    }
}

impl<'a> TestCtx<'a, RosterApp> {
    /// App backed by a mock server serving `body` with `status_code`.
    pub async fn new_app(status_code: u16, body: String) -> Self {
        let (mock_server, state) = setup_test_state(status_code, body).await;
        let app = RosterApp::new(state);
        let harness = Harness::new_eframe(|_| app);

        Self {
            _mock_server: mock_server,
            harness,
        }
    }

    #[allow(unused)]
    pub async fn new_app_with_members(count: usize) -> Self {
        Self::new_app(200, members_json(count)).await
    }

    /// Step frames until the fetch settles or the deadline passes.
    #[allow(unused)]
    pub async fn wait_for_fetch(&mut self) {
        for _ in 0..100 {
            self.harness.step();
            let fetch = self.harness.state().state().ctx.state::<MembersFetchState>();
            if fetch.is_loaded() || fetch.error().is_some() {
                break;
            }
            yield_wait_for_network(DEFAULT_NETWORK_WAIT_MS).await;
        }
        self.harness.run();
    }
}

async fn setup_test_state(status_code: u16, body: String) -> (MockServer, State) {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(MEMBERS_PATH))
        .respond_with(ResponseTemplate::new(status_code).set_body_string(body))
        .mount(&mock_server)
        .await;

    let state = State::test(format!("{}{MEMBERS_PATH}", mock_server.uri()));

    (mock_server, state)
}

/// A member list shaped like the hosted one, ids starting at 1.
pub fn members_json(count: usize) -> String {
    let roles = ["member", "admin"];
    let members: Vec<String> = (1..=count)
        .map(|n| {
            format!(
                r#"{{"id":"{n}","name":"Member {n:02}","email":"member{n}@mailinator.com","role":"{}"}}"#,
                roles[n % 2]
            )
        })
        .collect();
    format!("[{}]", members.join(","))
}

/// Give background requests time to complete.
pub async fn yield_wait_for_network(ms: u64) {
    tokio::time::sleep(Duration::from_millis(ms)).await;
}
