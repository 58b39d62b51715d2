use std::sync::Arc;

use menuart_core::application::MenuArtService;

use crate::args::Args;

#[derive(Clone)]
pub struct AppState {
    pub args: Arc<Args>,
    pub service: MenuArtService,
}

impl AppState {
    pub fn new(args: Arc<Args>, service: MenuArtService) -> Self {
        Self { args, service }
    }
}
