use crate::api::error::ApiResult;
use crate::domain::models::EmployeePage;

#[derive(Debug)]
pub enum Message {
    // Search pipeline
    QueryChanged(String),
    ClearQuery,
    DebounceElapsed,
    FetchCompleted(ApiResult<EmployeePage>),
    Refetch,

    // Filters
    CycleSearchField,
    CycleDepartment,

    // Result selection
    SelectUp,
    SelectDown,
    SelectPageUp,
    SelectPageDown,
    SelectFirst,
    SelectLast,

    // Mode changes
    EnterDetail,
    CloseDetail,
    ShowHelp,
    CloseHelp,

    // UI events
    SetStatus(String),
    ClearStatus,
    Quit,
}
