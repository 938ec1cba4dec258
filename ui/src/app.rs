use std::time::Duration;

use roster_business::{ApplyFetchedMembersCommand, LoadMembersCommand, MembersLoadState};

use crate::{state::State, widgets};

pub struct AdminApp {
    state: State,
}

impl AdminApp {
    /// Called once before the first frame. Issues the one-time member load.
    pub fn new(mut state: State) -> Self {
        state.ctx.dispatch::<LoadMembersCommand>();
        Self { state }
    }

    pub fn state(&self) -> &State {
        &self.state
    }
}

impl eframe::App for AdminApp {
    /// Called each time the UI needs repainting, which may be many times per second.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Pick up the load result, if it arrived since the last frame.
        if self.state.ctx.sync_states() > 0 {
            self.state.ctx.dispatch::<ApplyFetchedMembersCommand>();
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading("Members");
            ui.separator();
            widgets::admin_table_panel(&mut self.state.ctx, ui);
        });

        // The response lands off the UI thread; keep polling until it does.
        if self.state.ctx.state::<MembersLoadState>().is_loading() {
            ctx.request_repaint_after(Duration::from_millis(100));
        }
    }
}
