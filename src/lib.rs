pub mod api;
pub mod app;
pub mod constants;
pub mod domain;
pub mod logging;
pub mod output;
pub mod ui;


pub use api::client::DirectoryClient;
pub use api::error::{ApiError, ApiResult};
pub use api::gate::{FetchOutcome, RequestGate, SearchBackend};
pub use app::DirectoryApp;
pub use domain::models::{DisplayState, Employee, EmployeePage, SearchField, SearchParams};
