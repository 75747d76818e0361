use std::sync::Arc;

use antiox_core::application::AntioxService;

use crate::args::Args;

#[derive(Clone)]
pub struct AppState {
    pub args: Arc<Args>,
    pub service: AntioxService,
}

impl AppState {
    pub fn new(args: Arc<Args>, service: AntioxService) -> Self {
        Self { args, service }
    }
}
