use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

/// The response when an error occurs with an API request
#[derive(Serialize, Deserialize, ToSchema)]
pub struct ErrorDto {
    /// The error message
    pub error: String,
}

/// A single page of results along with the total number of matching items
#[derive(Serialize, Deserialize, ToSchema)]
pub struct PaginatedDto<T> {
    /// Total number of items across all pages
    pub count: u64,
    /// Items on the requested page
    pub results: Vec<T>,
}

/// Page selection shared by paginated list endpoints
#[derive(Clone, Copy, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct PageParams {
    /// Page number starting from 1, defaults to 1
    pub page: Option<u64>,
    /// Items per page, defaults to 6 and is capped at 100
    pub limit: Option<u64>,
}
