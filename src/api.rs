use gloo_net::http::{Request, Response};

use crate::config::{
    ClientConfig, DEFAULT_PDF_FILENAME, GENERATE_PDF_PATH, GENERATE_WORKSHEET_PATH, HEALTH_PATH,
};
use crate::error::{ClientError, Result};
use crate::model::{GenerateRequest, HealthStatus, PdfRequest, Worksheet};

/// Remote worksheet service. Implemented over HTTP in the browser and by
/// in-memory fakes in tests.
#[allow(async_fn_in_trait)]
pub trait WorksheetApi {
    async fn generate_worksheet(&self, request: &GenerateRequest) -> Result<Worksheet>;
    async fn generate_pdf(&self, request: &PdfRequest) -> Result<PdfDocument>;
    async fn health(&self) -> Result<HealthStatus>;
}

#[derive(Clone, PartialEq, Debug)]
pub struct PdfDocument {
    pub filename: String,
    pub bytes: Vec<u8>,
}

impl PdfDocument {
    pub fn from_response(content_disposition: Option<&str>, bytes: Vec<u8>) -> Self {
        Self {
            filename: filename_from_disposition(content_disposition),
            bytes,
        }
    }
}

/// Pulls `name` out of `...; filename="name"`, falling back to the default
/// worksheet filename when the header is absent or malformed.
pub fn filename_from_disposition(header: Option<&str>) -> String {
    header
        .and_then(|h| {
            let start = h.find("filename=\"")? + "filename=\"".len();
            let rest = &h[start..];
            let end = rest.find('"')?;
            let name = &rest[..end];
            (!name.is_empty()).then(|| name.to_string())
        })
        .unwrap_or_else(|| DEFAULT_PDF_FILENAME.to_string())
}

#[derive(Clone, Debug)]
pub struct HttpApi {
    config: ClientConfig,
}

impl HttpApi {
    pub fn new(config: ClientConfig) -> Self {
        Self { config }
    }
}

async fn status_error(resp: &Response) -> ClientError {
    let status = resp.status();
    let body = resp.text().await.unwrap_or_default();
    ClientError::from_status(status, &body)
}

impl WorksheetApi for HttpApi {
    async fn generate_worksheet(&self, request: &GenerateRequest) -> Result<Worksheet> {
        let url = self.config.endpoint(GENERATE_WORKSHEET_PATH);
        log::debug!("POST {} ({} / {})", url, request.mood, request.subject.token());

        let resp = Request::post(&url)
            .header("Accept", "application/json")
            .json(request)?
            .send()
            .await?;

        if !resp.ok() {
            return Err(status_error(&resp).await);
        }
        Ok(resp.json::<Worksheet>().await?)
    }

    async fn generate_pdf(&self, request: &PdfRequest) -> Result<PdfDocument> {
        let url = self.config.endpoint(GENERATE_PDF_PATH);
        log::debug!("POST {} (worksheet {})", url, request.worksheet_id);

        let resp = Request::post(&url).json(request)?.send().await?;

        if !resp.ok() {
            return Err(status_error(&resp).await);
        }
        let disposition = resp.headers().get("Content-Disposition");
        let bytes = resp.binary().await?;
        Ok(PdfDocument::from_response(disposition.as_deref(), bytes))
    }

    async fn health(&self) -> Result<HealthStatus> {
        let url = self.config.endpoint(HEALTH_PATH);
        let resp = Request::get(&url).send().await?;
        // The backend reports "unhealthy" with a 500 and a JSON body, so decode
        // regardless of status.
        Ok(resp.json::<HealthStatus>().await?)
    }
}
