//! Download handler
//!
//! `type=all` streams the capture itself. Every other type runs the slicer
//! into a temporary file, opens it, hands it back for deferred deletion
//! and streams the open handle, so the deletion can never cut a response
//! short.

use super::error::{HandlerError, from_error, internal, not_found};
use crate::state::WebState;
use psw_application::ports::PreparedDownload;
use psw_domain::value_objects::{DownloadRequest, RenderKind};
use rocket::request::Request;
use rocket::response::{self, Responder, Response};
use rocket::{FromForm, State, get};
use std::io::ErrorKind;
use tokio::fs::File;
use tracing::{debug, warn};

/// Raw `/download` parameters, validated into a [`DownloadRequest`]
#[derive(Debug, FromForm)]
pub struct DownloadParams {
    /// Capture file name
    pub filename: Option<String>,
    /// Offset of the match selecting the flow
    pub offset: Option<String>,
    /// Render kind
    #[field(name = "type")]
    pub kind: Option<String>,
    /// Service directory
    pub service: Option<String>,
}

/// An open file with its content type and optional attachment name
#[derive(Debug)]
pub struct DownloadResponse {
    file: File,
    content_type: &'static str,
    attachment_name: Option<String>,
}

impl DownloadResponse {
    fn new(file: File, kind: RenderKind, attachment_name: String) -> Self {
        Self {
            file,
            content_type: kind.content_type(),
            attachment_name: kind.is_capture().then_some(attachment_name),
        }
    }
}

impl<'r> Responder<'r, 'static> for DownloadResponse {
    fn respond_to(self, _request: &'r Request<'_>) -> response::Result<'static> {
        let mut response = Response::build();
        response.raw_header("Content-Type", self.content_type);
        if let Some(name) = self.attachment_name {
            response.raw_header(
                "Content-Disposition",
                format!("attachment; filename=\"{}\"", name.replace('"', "\\\"")),
            );
        }
        response.sized_body(None, self.file).ok()
    }
}

/// Stream a capture or a rendering of the flow at `offset`
#[get("/download?<params..>")]
pub async fn download(
    state: &State<WebState>,
    params: DownloadParams,
) -> Result<DownloadResponse, HandlerError> {
    let request = DownloadRequest::from_params(
        params.filename.as_deref(),
        params.offset.as_deref(),
        params.kind.as_deref(),
        state.download_service(params.service.as_deref()),
    )
    .map_err(|e| from_error(&e))?;

    let prepared = state
        .services
        .download
        .prepare(&request)
        .await
        .map_err(|e| from_error(&e))?;

    match prepared {
        PreparedDownload::Capture {
            path,
            attachment_name,
        } => {
            let file = File::open(&path).await.map_err(|e| {
                if e.kind() == ErrorKind::NotFound {
                    not_found(request.filename.as_str())
                } else {
                    warn!(path = %path.display(), error = %e, "cannot open capture");
                    internal(format!("cannot open {}", request.filename.as_str()))
                }
            })?;
            debug!(path = %path.display(), "streaming capture");
            Ok(DownloadResponse::new(file, request.kind, attachment_name))
        }
        PreparedDownload::Rendered {
            artifact,
            kind,
            attachment_name,
            outcome,
        } => {
            if let Some(reason) = outcome.failure() {
                debug!(%reason, kind = %kind, "streaming an empty rendering");
            }
            let opened = File::open(artifact.path()).await;
            state.services.download.release(artifact);
            let file = opened.map_err(|e| {
                warn!(error = %e, "cannot open rendering");
                internal("rendering is not readable")
            })?;
            Ok(DownloadResponse::new(file, kind, attachment_name))
        }
    }
}
