use std::time::Duration;

use roster_business::{FetchMembersCommand, MembersFetchState};

use crate::{state::State, widgets};

/// How often to poll for the fetch result while it is in flight.
const PENDING_REPAINT_INTERVAL: Duration = Duration::from_millis(100);

pub struct RosterApp {
    state: State,
    fetch_requested: bool,
}

impl RosterApp {
    /// Called once before the first frame.
    pub fn new(state: State) -> Self {
        Self {
            state,
            fetch_requested: false,
        }
    }

    pub fn state(&self) -> &State {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut State {
        &mut self.state
    }
}

impl eframe::App for RosterApp {
    /// Called each time the UI needs repainting, which may be many times per second.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // The member list is loaded exactly once, on the first frame.
        if !self.fetch_requested {
            self.fetch_requested = true;
            self.state.ctx.enqueue_command::<FetchMembersCommand>();
        }

        // Apply results published by background work
        self.state.ctx.sync();

        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            ui.add_space(4.0);
            ui.heading("Members");
            ui.add_space(4.0);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            widgets::members_panel(&mut self.state.ctx, ui);
        });

        // Run commands queued during this frame
        self.state.ctx.flush_commands();

        if self.state.ctx.state::<MembersFetchState>().is_pending() {
            ctx.request_repaint_after(PENDING_REPAINT_INTERVAL);
        }
    }
}
