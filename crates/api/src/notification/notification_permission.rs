use crate::{
    error::JobTrailError,
    shared::usecase::{execute, UseCase},
};
use actix_web::{web, HttpResponse};
use jobtrail_api_structs::NotificationPermissionResponse;
use jobtrail_domain::PermissionState;
use jobtrail_infra::{INotificationHost, JobTrailContext};

fn to_response((supported, permission): (bool, PermissionState)) -> HttpResponse {
    HttpResponse::Ok().json(NotificationPermissionResponse {
        supported,
        permission,
    })
}

pub async fn get_notification_permission_controller(
    ctx: web::Data<JobTrailContext>,
) -> Result<HttpResponse, JobTrailError> {
    execute(GetNotificationPermissionUseCase {}, &ctx)
        .await
        .map(to_response)
        .map_err(|_| JobTrailError::InternalError)
}

pub async fn request_notification_permission_controller(
    ctx: web::Data<JobTrailContext>,
) -> Result<HttpResponse, JobTrailError> {
    execute(RequestNotificationPermissionUseCase {}, &ctx)
        .await
        .map(to_response)
        .map_err(|_| JobTrailError::InternalError)
}

#[derive(Debug)]
pub struct GetNotificationPermissionUseCase {}

#[derive(Debug)]
pub enum UseCaseErrors {}

#[async_trait::async_trait(?Send)]
impl UseCase for GetNotificationPermissionUseCase {
    type Response = (bool, PermissionState);

    type Errors = UseCaseErrors;

    async fn execute(&mut self, ctx: &JobTrailContext) -> Result<Self::Response, Self::Errors> {
        Ok((
            ctx.notification_center.is_supported(),
            ctx.dispatcher().permission(),
        ))
    }
}

/// Asks for permission to show host notifications. Only a permission which
/// was never decided on can change.
#[derive(Debug)]
pub struct RequestNotificationPermissionUseCase {}

#[async_trait::async_trait(?Send)]
impl UseCase for RequestNotificationPermissionUseCase {
    type Response = (bool, PermissionState);

    type Errors = UseCaseErrors;

    async fn execute(&mut self, ctx: &JobTrailContext) -> Result<Self::Response, Self::Errors> {
        Ok((
            ctx.notification_center.is_supported(),
            ctx.dispatcher().request_permission(),
        ))
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use jobtrail_infra::Config;

    fn setup(permission: PermissionState) -> JobTrailContext {
        let mut config = Config::new();
        config.host_notifications_supported = true;
        config.host_notification_permission = permission;
        JobTrailContext::create(config)
    }

    #[actix_web::test]
    async fn request_grants_undecided_permission() {
        let ctx = setup(PermissionState::Default);
        let mut usecase = RequestNotificationPermissionUseCase {};
        assert_eq!(
            usecase.execute(&ctx).await.unwrap(),
            (true, PermissionState::Granted)
        );

        let mut usecase = GetNotificationPermissionUseCase {};
        assert_eq!(
            usecase.execute(&ctx).await.unwrap(),
            (true, PermissionState::Granted)
        );
    }

    #[actix_web::test]
    async fn denied_permission_stays_denied() {
        let ctx = setup(PermissionState::Denied);
        let mut usecase = RequestNotificationPermissionUseCase {};
        assert_eq!(
            usecase.execute(&ctx).await.unwrap(),
            (true, PermissionState::Denied)
        );
    }
}
