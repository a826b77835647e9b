use std::sync::Arc;

use poem_openapi::{OpenApi, param::Query, payload::Json};

use business::domain::user::use_cases::find_by_email::{
    FindUserByEmailParams, FindUserByEmailUseCase,
};
use business::domain::user::use_cases::sync_profile::{
    SyncUserProfileParams, SyncUserProfileUseCase,
};

use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::security::{AuthenticatedUser, FirebaseBearer};
use crate::api::tags::ApiTags;
use crate::api::user::dto::UserResponse;

pub struct UserApi {
    sync_profile_use_case: Arc<dyn SyncUserProfileUseCase>,
    find_by_email_use_case: Arc<dyn FindUserByEmailUseCase>,
}

impl UserApi {
    pub fn new(
        sync_profile_use_case: Arc<dyn SyncUserProfileUseCase>,
        find_by_email_use_case: Arc<dyn FindUserByEmailUseCase>,
    ) -> Self {
        Self {
            sync_profile_use_case,
            find_by_email_use_case,
        }
    }
}

/// Profile claims to store for the signed-in user. A missing display name
/// falls back to the local part of the email.
fn profile_params(user: AuthenticatedUser) -> SyncUserProfileParams {
    let email = user.email.unwrap_or_default();
    let name = user
        .name
        .filter(|name| !name.trim().is_empty())
        .unwrap_or_else(|| email.split('@').next().unwrap_or_default().to_string());

    SyncUserProfileParams {
        id: user.uid,
        email,
        name,
        photo_url: user.picture,
    }
}

/// User profiles
#[OpenApi]
impl UserApi {
    /// Sync the caller's profile
    ///
    /// Stores the identity provider claims of the caller so other users can
    /// find them by email. Clients call this after every sign-in.
    #[oai(path = "/me", method = "put", tag = "ApiTags::Users")]
    async fn sync_profile(&self, auth: FirebaseBearer) -> SyncProfileResponse {
        match self.sync_profile_use_case.execute(profile_params(auth.0)).await {
            Ok(user) => SyncProfileResponse::Ok(Json(user.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => SyncProfileResponse::BadRequest(json),
                    503 => SyncProfileResponse::ServiceUnavailable(json),
                    _ => SyncProfileResponse::InternalError(json),
                }
            }
        }
    }

    /// Find a user by email
    #[oai(path = "/users", method = "get", tag = "ApiTags::Users")]
    async fn find_by_email(
        &self,
        _auth: FirebaseBearer,
        email: Query<String>,
    ) -> FindUserByEmailResponse {
        match self
            .find_by_email_use_case
            .execute(FindUserByEmailParams { email: email.0 })
            .await
        {
            Ok(user) => FindUserByEmailResponse::Ok(Json(user.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => FindUserByEmailResponse::BadRequest(json),
                    404 => FindUserByEmailResponse::NotFound(json),
                    503 => FindUserByEmailResponse::ServiceUnavailable(json),
                    _ => FindUserByEmailResponse::InternalError(json),
                }
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum SyncProfileResponse {
    #[oai(status = 200)]
    Ok(Json<UserResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 503)]
    ServiceUnavailable(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum FindUserByEmailResponse {
    #[oai(status = 200)]
    Ok(Json<UserResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 503)]
    ServiceUnavailable(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}
