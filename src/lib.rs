pub mod app;
pub mod coach;
pub mod errors;
pub mod handlers;
pub mod models;
pub mod storage;
pub mod store;
pub mod ui;
pub mod weather;

pub use app::router;
pub use storage::{load_state, resolve_data_path};
pub use store::StateStore;
