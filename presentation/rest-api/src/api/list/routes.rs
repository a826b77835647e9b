use std::sync::Arc;

use futures_util::stream::BoxStream;
use poem_openapi::{
    OpenApi,
    param::Path,
    payload::{EventStream, Json},
};
use uuid::Uuid;

use business::domain::list::use_cases::create::{CreateListParams, CreateListUseCase};
use business::domain::list::use_cases::delete::{DeleteListParams, DeleteListUseCase};
use business::domain::list::use_cases::subscribe::{SubscribeListsParams, SubscribeListsUseCase};
use business::domain::list::use_cases::update::{UpdateListParams, UpdateListUseCase};

use crate::api::error::{ErrorResponse, IntoErrorResponse, invalid_id};
use crate::api::list::dto::{CreateListRequest, ListResponse, ListsEvent, UpdateListRequest};
use crate::api::live::{event_stream, first_state, queued_states};
use crate::api::security::FirebaseBearer;
use crate::api::tags::ApiTags;

pub struct ListApi {
    create_use_case: Arc<dyn CreateListUseCase>,
    update_use_case: Arc<dyn UpdateListUseCase>,
    delete_use_case: Arc<dyn DeleteListUseCase>,
    subscribe_use_case: Arc<dyn SubscribeListsUseCase>,
}

impl ListApi {
    pub fn new(
        create_use_case: Arc<dyn CreateListUseCase>,
        update_use_case: Arc<dyn UpdateListUseCase>,
        delete_use_case: Arc<dyn DeleteListUseCase>,
        subscribe_use_case: Arc<dyn SubscribeListsUseCase>,
    ) -> Self {
        Self {
            create_use_case,
            update_use_case,
            delete_use_case,
            subscribe_use_case,
        }
    }
}

/// Shopping lists
///
/// Lists the caller owns or collaborates on.
#[OpenApi]
impl ListApi {
    /// Current lists of the caller
    ///
    /// Ordered by last update, newest first.
    #[oai(path = "/lists", method = "get", tag = "ApiTags::Lists")]
    async fn get_all(&self, auth: FirebaseBearer) -> GetListsResponse {
        let (on_change, states) = queued_states();
        let params = SubscribeListsParams {
            user_id: Some(auth.0.uid),
            on_change,
        };

        let subscription = match self.subscribe_use_case.execute(params).await {
            Ok(subscription) => subscription,
            Err(err) => {
                let (_status, json) = err.into_error_response();
                return GetListsResponse::ServiceUnavailable(json);
            }
        };

        let state = first_state(subscription, states).await;
        match state.error {
            None => GetListsResponse::Ok(Json(
                state.records.into_iter().map(Into::into).collect(),
            )),
            Some(message) => GetListsResponse::ServiceUnavailable(Json(ErrorResponse {
                name: "BackendUnavailable".to_string(),
                message,
            })),
        }
    }

    /// Stream the caller's lists
    ///
    /// Sends the full set of lists as a server-sent event on every change.
    /// Closing the connection ends the subscription.
    #[oai(path = "/lists/stream", method = "get", tag = "ApiTags::Lists")]
    async fn stream(&self, auth: FirebaseBearer) -> StreamListsResponse {
        let (on_change, states) = queued_states();
        let params = SubscribeListsParams {
            user_id: Some(auth.0.uid),
            on_change,
        };

        match self.subscribe_use_case.execute(params).await {
            Ok(subscription) => StreamListsResponse::Ok(EventStream::new(event_stream(
                subscription,
                states,
                ListsEvent::from,
            ))),
            Err(err) => {
                let (_status, json) = err.into_error_response();
                StreamListsResponse::ServiceUnavailable(json)
            }
        }
    }

    /// Create a list
    ///
    /// The caller becomes the owner and first collaborator.
    #[oai(path = "/lists", method = "post", tag = "ApiTags::Lists")]
    async fn create(
        &self,
        auth: FirebaseBearer,
        body: Json<CreateListRequest>,
    ) -> CreateListResponse {
        let params = CreateListParams {
            owner_id: Some(auth.0.uid),
            title: body.0.title,
            description: body.0.description,
        };

        match self.create_use_case.execute(params).await {
            Ok(list) => CreateListResponse::Created(Json(list.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => CreateListResponse::BadRequest(json),
                    401 => CreateListResponse::Unauthorized(json),
                    503 => CreateListResponse::ServiceUnavailable(json),
                    _ => CreateListResponse::InternalError(json),
                }
            }
        }
    }

    /// Update a list
    ///
    /// Only the supplied fields change.
    #[oai(path = "/lists/:id", method = "patch", tag = "ApiTags::Lists")]
    async fn update(
        &self,
        _auth: FirebaseBearer,
        id: Path<String>,
        body: Json<UpdateListRequest>,
    ) -> UpdateListResponse {
        let Ok(id) = Uuid::parse_str(&id.0) else {
            return UpdateListResponse::BadRequest(invalid_id("list.invalid_id"));
        };

        let params = UpdateListParams {
            id,
            title: body.0.title,
            description: body.0.description,
        };

        match self.update_use_case.execute(params).await {
            Ok(list) => UpdateListResponse::Ok(Json(list.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => UpdateListResponse::BadRequest(json),
                    404 => UpdateListResponse::NotFound(json),
                    503 => UpdateListResponse::ServiceUnavailable(json),
                    _ => UpdateListResponse::InternalError(json),
                }
            }
        }
    }

    /// Delete a list
    #[oai(path = "/lists/:id", method = "delete", tag = "ApiTags::Lists")]
    async fn delete(&self, _auth: FirebaseBearer, id: Path<String>) -> DeleteListResponse {
        let Ok(id) = Uuid::parse_str(&id.0) else {
            return DeleteListResponse::BadRequest(invalid_id("list.invalid_id"));
        };

        match self.delete_use_case.execute(DeleteListParams { id }).await {
            Ok(()) => DeleteListResponse::NoContent,
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => DeleteListResponse::NotFound(json),
                    503 => DeleteListResponse::ServiceUnavailable(json),
                    _ => DeleteListResponse::InternalError(json),
                }
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetListsResponse {
    #[oai(status = 200)]
    Ok(Json<Vec<ListResponse>>),
    #[oai(status = 503)]
    ServiceUnavailable(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum StreamListsResponse {
    #[oai(status = 200)]
    Ok(EventStream<BoxStream<'static, ListsEvent>>),
    #[oai(status = 503)]
    ServiceUnavailable(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum CreateListResponse {
    #[oai(status = 201)]
    Created(Json<ListResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 401)]
    Unauthorized(Json<ErrorResponse>),
    #[oai(status = 503)]
    ServiceUnavailable(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum UpdateListResponse {
    #[oai(status = 200)]
    Ok(Json<ListResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 503)]
    ServiceUnavailable(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum DeleteListResponse {
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
