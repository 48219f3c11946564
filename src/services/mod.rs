// TabFinder services
// Services are stateless or configuration-only: matching, ranking, rendering, settings, browser interfaces.

pub mod browser_api;
pub mod fuzzy_matcher;
pub mod ranker;
pub mod row_renderer;
pub mod settings_engine;
