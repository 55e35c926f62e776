use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct IngredientDto {
    pub id: i32,
    pub name: String,
    pub measurement_unit: String,
}

/// Query parameters for the ingredient catalog search
#[derive(Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct IngredientSearchParams {
    /// Case-insensitive prefix of the ingredient name
    pub name: Option<String>,
}
