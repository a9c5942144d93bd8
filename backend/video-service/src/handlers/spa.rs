use std::io;
use std::path::Path;

use actix_web::http::Method;
use actix_web::{web, HttpRequest, HttpResponse};

use crate::error::{AppError, Result};

/// The single-page application shell served for unmatched `GET` routes
#[derive(Debug, Clone)]
pub struct SpaShell {
    html: String,
}

impl SpaShell {
    /// Read `index.html` from `dir`
    pub fn load(dir: &Path) -> io::Result<Self> {
        let path = dir.join("index.html");
        let html = std::fs::read_to_string(&path).map_err(|e| {
            io::Error::new(e.kind(), format!("failed to read {}: {e}", path.display()))
        })?;

        Ok(Self { html })
    }

    pub fn from_html(html: impl Into<String>) -> Self {
        Self { html: html.into() }
    }
}

/// Default service: the shell for `GET`/`HEAD`, 404 for anything else
pub async fn spa_fallback(req: HttpRequest, shell: web::Data<SpaShell>) -> Result<HttpResponse> {
    if req.method() == Method::GET || req.method() == Method::HEAD {
        return Ok(HttpResponse::Ok()
            .content_type("text/html; charset=utf-8")
            .body(shell.html.clone()));
    }

    Err(AppError::NotFound(format!(
        "NOT FOUND: Cannot {} {}",
        req.method(),
        req.path()
    )))
}
