mod handle_captive_query;

pub use handle_captive_query::{HandleCaptiveQueryUseCase, QueryAnswer};
