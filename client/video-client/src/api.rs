use reqwest::{Response, StatusCode, Url};
use tracing::debug;

use crate::error::{ClientError, Result};
use crate::models::{NewVideo, OutcomeBody, SortOrder, Video};

/// Typed client for the `/api` endpoints
#[derive(Debug, Clone)]
pub struct VideoApiClient {
    http: reqwest::Client,
    base_url: Url,
}

impl VideoApiClient {
    pub fn new(base_url: &str) -> Result<Self> {
        Self::with_client(reqwest::Client::new(), base_url)
    }

    pub fn with_client(http: reqwest::Client, base_url: &str) -> Result<Self> {
        let base_url = Url::parse(base_url)
            .map_err(|e| ClientError::InvalidBaseUrl(format!("{base_url}: {e}")))?;

        if !matches!(base_url.scheme(), "http" | "https") {
            return Err(ClientError::InvalidBaseUrl(format!(
                "{base_url}: scheme must be http or https"
            )));
        }

        Ok(Self { http, base_url })
    }

    fn endpoint(&self, path: &str) -> Result<Url> {
        self.base_url
            .join(path)
            .map_err(|e| ClientError::InvalidBaseUrl(e.to_string()))
    }

    /// Fetch the whole catalog.
    ///
    /// The server answers an empty catalog with 400, which is reported here
    /// as an empty list.
    pub async fn list(&self, order: SortOrder) -> Result<Vec<Video>> {
        let url = self.endpoint("/api")?;
        let resp = self
            .http
            .get(url)
            .query(&[("order", order.as_query())])
            .send()
            .await?;

        match resp.status() {
            StatusCode::OK => Ok(resp.json().await?),
            StatusCode::BAD_REQUEST => {
                debug!("List rejected, treating catalog as empty");
                Ok(Vec::new())
            }
            _ => Err(failure(resp).await),
        }
    }

    pub async fn get(&self, id: i32) -> Result<Video> {
        let resp = self.http.get(self.endpoint(&format!("/api/{id}"))?).send().await?;

        match resp.status() {
            StatusCode::OK => {
                let videos: Vec<Video> = resp.json().await?;
                videos.into_iter().next().ok_or(ClientError::NotFound(id))
            }
            StatusCode::NOT_FOUND => Err(ClientError::NotFound(id)),
            _ => Err(failure(resp).await),
        }
    }

    /// Returns the id assigned by the server
    pub async fn create(&self, video: &NewVideo) -> Result<i32> {
        let resp = self
            .http
            .post(self.endpoint("/api")?)
            .json(video)
            .send()
            .await?;

        if resp.status() != StatusCode::CREATED {
            return Err(failure(resp).await);
        }

        let status = resp.status();
        let body: OutcomeBody = resp.json().await?;
        body.id.ok_or(ClientError::UnexpectedStatus {
            status,
            message: "created response carried no id".to_string(),
        })
    }

    /// Succeeds only on 200
    pub async fn delete(&self, id: i32) -> Result<()> {
        let resp = self
            .http
            .delete(self.endpoint(&format!("/api/{id}"))?)
            .send()
            .await?;

        if resp.status() != StatusCode::OK {
            return Err(failure(resp).await);
        }
        Ok(())
    }

    pub async fn update_rating(&self, id: i32, rating: i32) -> Result<()> {
        let resp = self
            .http
            .put(self.endpoint(&format!("/api/{id}"))?)
            .json(&serde_json::json!({ "rating": rating }))
            .send()
            .await?;

        if resp.status() != StatusCode::OK {
            return Err(failure(resp).await);
        }
        Ok(())
    }
}

async fn failure(resp: Response) -> ClientError {
    let status = resp.status();
    let text = resp.text().await.unwrap_or_default();
    let message = serde_json::from_str::<OutcomeBody>(&text)
        .map(|body| body.message)
        .unwrap_or(text);

    ClientError::UnexpectedStatus { status, message }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_non_http_base_url() {
        assert!(matches!(
            VideoApiClient::new("ftp://example.com"),
            Err(ClientError::InvalidBaseUrl(_))
        ));
        assert!(matches!(
            VideoApiClient::new("not a url"),
            Err(ClientError::InvalidBaseUrl(_))
        ));
    }

    #[test]
    fn test_endpoint_joins_absolute_paths() {
        let client = VideoApiClient::new("http://localhost:5000/ignored/").unwrap();
        assert_eq!(
            client.endpoint("/api/3").unwrap().as_str(),
            "http://localhost:5000/api/3"
        );
    }
}
