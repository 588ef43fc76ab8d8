use std::sync::Arc;

use strategy_forge_core::application::StrategyForgeService;

use crate::args::Args;

#[derive(Clone)]
pub struct AppState {
    pub args: Arc<Args>,
    pub service: StrategyForgeService,
}

impl AppState {
    pub fn new(args: Arc<Args>, service: StrategyForgeService) -> Self {
        Self { args, service }
    }
}
