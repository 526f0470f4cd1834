pub mod board;

use std::sync::Arc;

use crate::shared::config::Config;
use crate::usecases::u101_probe_board::Fetcher;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub fetcher: Arc<dyn Fetcher>,
}
