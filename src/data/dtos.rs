use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::entities::Record;
use crate::view::ViewFilter;

/// Success envelope for the record endpoints.
#[derive(Debug, Serialize, ToSchema)]
pub struct DataResponse {
    pub success: bool,
    pub count: usize,
    pub data: Vec<Record>,
}

impl DataResponse {
    pub fn new(data: Vec<Record>) -> Self {
        Self {
            success: true,
            count: data.len(),
            data,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    pub success: bool,
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            success: false,
            error: error.into(),
        }
    }
}

/// Optional equality predicates for `/api/data/filtered`.
#[derive(Debug, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
pub struct FilteredParams {
    pub domain: Option<String>,
    pub source: Option<String>,
    pub extension: Option<String>,
    pub has_video: Option<bool>,
}

impl From<FilteredParams> for ViewFilter {
    fn from(params: FilteredParams) -> Self {
        ViewFilter {
            domain: params.domain,
            source: params.source,
            extension: params.extension,
            has_video: params.has_video,
        }
    }
}
