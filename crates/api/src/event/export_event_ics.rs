use crate::{
    error::JobTrailError,
    shared::{
        guard::Guard,
        usecase::{execute, UseCase},
    },
};
use actix_web::{
    http::header::{self, ContentDisposition, DispositionParam, DispositionType},
    web, HttpResponse,
};
use jobtrail_api_structs::export_event_ics::*;
use jobtrail_domain::{ical, ID};
use jobtrail_infra::{ISys, JobTrailContext};

fn handle_error(e: UseCaseErrors) -> JobTrailError {
    match e {
        UseCaseErrors::NotFound(event_id) => JobTrailError::NotFound(format!(
            "The event with id: {}, was not found.",
            event_id
        )),
    }
}

pub async fn export_event_ics_controller(
    path_params: web::Path<PathParams>,
    ctx: web::Data<JobTrailContext>,
) -> Result<HttpResponse, JobTrailError> {
    let event_id = Guard::against_malformed_id(path_params.into_inner().event_id)?;

    execute(ExportEventIcsUseCase { event_id }, &ctx)
        .await
        .map(|export| {
            HttpResponse::Ok()
                .insert_header((
                    header::CONTENT_TYPE,
                    format!("{}; charset=utf-8", ical::MIME_TYPE),
                ))
                .insert_header(ContentDisposition {
                    disposition: DispositionType::Attachment,
                    parameters: vec![DispositionParam::Filename(export.filename)],
                })
                .body(export.content)
        })
        .map_err(handle_error)
}

#[derive(Debug)]
pub struct IcsExport {
    pub filename: String,
    pub content: String,
}

#[derive(Debug)]
pub struct ExportEventIcsUseCase {
    pub event_id: ID,
}

#[derive(Debug)]
pub enum UseCaseErrors {
    NotFound(ID),
}

#[async_trait::async_trait(?Send)]
impl UseCase for ExportEventIcsUseCase {
    type Response = IcsExport;

    type Errors = UseCaseErrors;

    async fn execute(&mut self, ctx: &JobTrailContext) -> Result<Self::Response, Self::Errors> {
        let event = ctx
            .repos
            .events
            .find(&self.event_id)
            .await
            .ok_or_else(|| UseCaseErrors::NotFound(self.event_id.clone()))?;

        Ok(IcsExport {
            filename: ical::ics_filename(&event),
            content: ical::encode(&event, ctx.sys.get_datetime()),
        })
    }
}
