use std::sync::Arc;

use poem_openapi::{
    OpenApi,
    param::{Path, Query},
    payload::Json,
};
use uuid::Uuid;

use business::domain::catalog::color::color_for;
use business::domain::catalog::index::CatalogIndex;
use business::domain::suggestion::engine::category_catalog;
use business::domain::suggestion::use_cases::suggest::{SuggestItemsParams, SuggestItemsUseCase};

use crate::api::error::{ErrorResponse, IntoErrorResponse, invalid_id};
use crate::api::security::FirebaseBearer;
use crate::api::suggestion::dto::{CategoryColorResponse, CategoryResponse, SuggestionsResponse};
use crate::api::tags::ApiTags;

pub struct SuggestionApi {
    suggest_use_case: Arc<dyn SuggestItemsUseCase>,
    catalog: Arc<CatalogIndex>,
}

impl SuggestionApi {
    pub fn new(suggest_use_case: Arc<dyn SuggestItemsUseCase>, catalog: Arc<CatalogIndex>) -> Self {
        Self {
            suggest_use_case,
            catalog,
        }
    }
}

/// Item suggestions and the product catalog
#[OpenApi]
impl SuggestionApi {
    /// Suggest items for a list
    ///
    /// Matches the typed prefix against the list's items and the product
    /// catalog, grouped by category. An empty prefix yields no groups.
    #[oai(
        path = "/lists/:list_id/suggestions",
        method = "get",
        tag = "ApiTags::Suggestions"
    )]
    async fn suggest(
        &self,
        _auth: FirebaseBearer,
        list_id: Path<String>,
        q: Query<Option<String>>,
    ) -> SuggestResponse {
        let Ok(list_id) = Uuid::parse_str(&list_id.0) else {
            return SuggestResponse::BadRequest(invalid_id("list.invalid_id"));
        };

        let params = SuggestItemsParams {
            list_id,
            typed: q.0.unwrap_or_default(),
        };

        match self.suggest_use_case.execute(params).await {
            Ok(grouped) => SuggestResponse::Ok(Json(grouped.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    503 => SuggestResponse::ServiceUnavailable(json),
                    _ => SuggestResponse::InternalError(json),
                }
            }
        }
    }

    /// Catalog categories
    ///
    /// Every category of the product catalog in catalog order, with the emoji
    /// of its first product and its display colour.
    #[oai(path = "/catalog/categories", method = "get", tag = "ApiTags::Catalog")]
    async fn categories(&self) -> Json<Vec<CategoryResponse>> {
        Json(
            category_catalog(&self.catalog)
                .into_iter()
                .map(Into::into)
                .collect(),
        )
    }

    /// Display colour of a category
    ///
    /// Stable across releases; unknown names get a colour derived from the name.
    #[oai(
        path = "/catalog/categories/:name/color",
        method = "get",
        tag = "ApiTags::Catalog"
    )]
    async fn category_color(&self, name: Path<String>) -> Json<CategoryColorResponse> {
        Json(CategoryColorResponse {
            color: color_for(&name.0).to_string(),
            category: name.0,
        })
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum SuggestResponse {
    #[oai(status = 200)]
    Ok(Json<SuggestionsResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 503)]
    ServiceUnavailable(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}
