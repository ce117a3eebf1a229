mod state_machine;

pub use state_machine::{transition, PanelEvent, PanelLayout, PanelState};
