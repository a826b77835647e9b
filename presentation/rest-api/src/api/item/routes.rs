use std::sync::Arc;

use futures_util::stream::BoxStream;
use poem_openapi::{
    OpenApi,
    param::Path,
    payload::{EventStream, Json},
};
use uuid::Uuid;

use business::domain::item::model::ListItemPatch;
use business::domain::item::use_cases::create::{CreateListItemParams, CreateListItemUseCase};
use business::domain::item::use_cases::delete::{DeleteListItemParams, DeleteListItemUseCase};
use business::domain::item::use_cases::subscribe::{
    SubscribeListItemsParams, SubscribeListItemsUseCase,
};
use business::domain::item::use_cases::toggle::{ToggleListItemParams, ToggleListItemUseCase};
use business::domain::item::use_cases::update::{UpdateListItemParams, UpdateListItemUseCase};

use crate::api::error::{ErrorResponse, IntoErrorResponse, invalid_id};
use crate::api::item::dto::{
    CreateListItemRequest, ItemsEvent, ListItemResponse, UpdateListItemRequest,
};
use crate::api::live::{event_stream, first_state, queued_states};
use crate::api::security::FirebaseBearer;
use crate::api::tags::ApiTags;

pub struct ListItemApi {
    create_use_case: Arc<dyn CreateListItemUseCase>,
    update_use_case: Arc<dyn UpdateListItemUseCase>,
    toggle_use_case: Arc<dyn ToggleListItemUseCase>,
    delete_use_case: Arc<dyn DeleteListItemUseCase>,
    subscribe_use_case: Arc<dyn SubscribeListItemsUseCase>,
}

impl ListItemApi {
    pub fn new(
        create_use_case: Arc<dyn CreateListItemUseCase>,
        update_use_case: Arc<dyn UpdateListItemUseCase>,
        toggle_use_case: Arc<dyn ToggleListItemUseCase>,
        delete_use_case: Arc<dyn DeleteListItemUseCase>,
        subscribe_use_case: Arc<dyn SubscribeListItemsUseCase>,
    ) -> Self {
        Self {
            create_use_case,
            update_use_case,
            toggle_use_case,
            delete_use_case,
            subscribe_use_case,
        }
    }
}

fn parse_ids(list_id: &str, item_id: &str) -> Result<(Uuid, Uuid), Json<ErrorResponse>> {
    let list_id = Uuid::parse_str(list_id).map_err(|_| invalid_id("list.invalid_id"))?;
    let item_id = Uuid::parse_str(item_id).map_err(|_| invalid_id("list_item.invalid_id"))?;
    Ok((list_id, item_id))
}

/// Items of a shopping list
#[OpenApi]
impl ListItemApi {
    /// Current items of a list
    ///
    /// Ordered by creation date, oldest first.
    #[oai(path = "/lists/:list_id/items", method = "get", tag = "ApiTags::ListItems")]
    async fn get_all(&self, _auth: FirebaseBearer, list_id: Path<String>) -> GetListItemsResponse {
        let Ok(list_id) = Uuid::parse_str(&list_id.0) else {
            return GetListItemsResponse::BadRequest(invalid_id("list.invalid_id"));
        };

        let (on_change, states) = queued_states();
        let subscription = match self
            .subscribe_use_case
            .execute(SubscribeListItemsParams { list_id, on_change })
            .await
        {
            Ok(subscription) => subscription,
            Err(err) => {
                let (_status, json) = err.into_error_response();
                return GetListItemsResponse::ServiceUnavailable(json);
            }
        };

        let state = first_state(subscription, states).await;
        match state.error {
            None => GetListItemsResponse::Ok(Json(
                state.records.into_iter().map(Into::into).collect(),
            )),
            Some(message) => GetListItemsResponse::ServiceUnavailable(Json(ErrorResponse {
                name: "BackendUnavailable".to_string(),
                message,
            })),
        }
    }

    /// Stream the items of a list
    ///
    /// Sends the full item set as a server-sent event on every change.
    #[oai(
        path = "/lists/:list_id/items/stream",
        method = "get",
        tag = "ApiTags::ListItems"
    )]
    async fn stream(&self, _auth: FirebaseBearer, list_id: Path<String>) -> StreamListItemsResponse {
        let Ok(list_id) = Uuid::parse_str(&list_id.0) else {
            return StreamListItemsResponse::BadRequest(invalid_id("list.invalid_id"));
        };

        let (on_change, states) = queued_states();
        match self
            .subscribe_use_case
            .execute(SubscribeListItemsParams { list_id, on_change })
            .await
        {
            Ok(subscription) => StreamListItemsResponse::Ok(EventStream::new(event_stream(
                subscription,
                states,
                ItemsEvent::from,
            ))),
            Err(err) => {
                let (_status, json) = err.into_error_response();
                StreamListItemsResponse::ServiceUnavailable(json)
            }
        }
    }

    /// Add an item to a list
    #[oai(path = "/lists/:list_id/items", method = "post", tag = "ApiTags::ListItems")]
    async fn create(
        &self,
        _auth: FirebaseBearer,
        list_id: Path<String>,
        body: Json<CreateListItemRequest>,
    ) -> CreateListItemResponse {
        let Ok(list_id) = Uuid::parse_str(&list_id.0) else {
            return CreateListItemResponse::BadRequest(invalid_id("list.invalid_id"));
        };

        let params = CreateListItemParams {
            list_id,
            details: body.0.details(),
            name: body.0.name,
        };

        match self.create_use_case.execute(params).await {
            Ok(item) => CreateListItemResponse::Created(Json(item.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => CreateListItemResponse::BadRequest(json),
                    503 => CreateListItemResponse::ServiceUnavailable(json),
                    _ => CreateListItemResponse::InternalError(json),
                }
            }
        }
    }

    /// Update an item
    ///
    /// Only the supplied fields change.
    #[oai(
        path = "/lists/:list_id/items/:item_id",
        method = "patch",
        tag = "ApiTags::ListItems"
    )]
    async fn update(
        &self,
        _auth: FirebaseBearer,
        list_id: Path<String>,
        item_id: Path<String>,
        body: Json<UpdateListItemRequest>,
    ) -> ListItemResult {
        let (list_id, id) = match parse_ids(&list_id.0, &item_id.0) {
            Ok(ids) => ids,
            Err(json) => return ListItemResult::BadRequest(json),
        };

        let patch = ListItemPatch {
            name: body.0.name,
            quantity: body.0.quantity,
            note: body.0.note,
            completed: body.0.completed,
        };

        let result = self
            .update_use_case
            .execute(UpdateListItemParams { list_id, id, patch })
            .await;
        ListItemResult::from_outcome(result)
    }

    /// Toggle the completed flag of an item
    #[oai(
        path = "/lists/:list_id/items/:item_id/toggle",
        method = "post",
        tag = "ApiTags::ListItems"
    )]
    async fn toggle(
        &self,
        _auth: FirebaseBearer,
        list_id: Path<String>,
        item_id: Path<String>,
    ) -> ListItemResult {
        let (list_id, id) = match parse_ids(&list_id.0, &item_id.0) {
            Ok(ids) => ids,
            Err(json) => return ListItemResult::BadRequest(json),
        };

        let result = self
            .toggle_use_case
            .execute(ToggleListItemParams { list_id, id })
            .await;
        ListItemResult::from_outcome(result)
    }

    /// Remove an item from a list
    #[oai(
        path = "/lists/:list_id/items/:item_id",
        method = "delete",
        tag = "ApiTags::ListItems"
    )]
    async fn delete(
        &self,
        _auth: FirebaseBearer,
        list_id: Path<String>,
        item_id: Path<String>,
    ) -> DeleteListItemResponse {
        let (list_id, id) = match parse_ids(&list_id.0, &item_id.0) {
            Ok(ids) => ids,
            Err(json) => return DeleteListItemResponse::BadRequest(json),
        };

        match self
            .delete_use_case
            .execute(DeleteListItemParams { list_id, id })
            .await
        {
            Ok(()) => DeleteListItemResponse::NoContent,
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => DeleteListItemResponse::NotFound(json),
                    503 => DeleteListItemResponse::ServiceUnavailable(json),
                    _ => DeleteListItemResponse::InternalError(json),
                }
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetListItemsResponse {
    #[oai(status = 200)]
    Ok(Json<Vec<ListItemResponse>>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 503)]
    ServiceUnavailable(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum StreamListItemsResponse {
    #[oai(status = 200)]
    Ok(EventStream<BoxStream<'static, ItemsEvent>>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 503)]
    ServiceUnavailable(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum CreateListItemResponse {
    #[oai(status = 201)]
    Created(Json<ListItemResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 503)]
    ServiceUnavailable(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

/// Outcome of an endpoint that changes a single item and returns it.
#[derive(poem_openapi::ApiResponse)]
pub enum ListItemResult {
    #[oai(status = 200)]
    Ok(Json<ListItemResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 503)]
    ServiceUnavailable(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

impl ListItemResult {
    fn from_outcome<E: IntoErrorResponse>(
        result: Result<business::domain::item::model::ListItem, E>,
    ) -> Self {
        match result {
            Ok(item) => ListItemResult::Ok(Json(item.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => ListItemResult::BadRequest(json),
                    404 => ListItemResult::NotFound(json),
                    503 => ListItemResult::ServiceUnavailable(json),
                    _ => ListItemResult::InternalError(json),
                }
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum DeleteListItemResponse {
    #[oai(status = 204)]
    NoContent,
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 503)]
    ServiceUnavailable(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}
