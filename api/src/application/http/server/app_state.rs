use std::sync::Arc;

use coachdesk_core::application::CoachDeskService;

use crate::args::Args;

#[derive(Clone)]
pub struct AppState {
    pub args: Arc<Args>,
    pub service: CoachDeskService,
}

impl AppState {
    pub fn new(args: Arc<Args>, service: CoachDeskService) -> Self {
        Self { args, service }
    }
}
