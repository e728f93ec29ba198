use async_trait::async_trait;
use serde::Serialize;
use std::time::Duration;
use tokio::sync::Mutex;

use crate::models::{NormalizedInterval, ServiceError};

#[derive(Serialize)]
struct TimeIntervalsPayload<'a> {
    intervals: &'a [NormalizedInterval],
}

/// The external service that stores availability and does the scheduling.
#[async_trait]
pub trait SchedulingBackend: Send + Sync {
    async fn submit_time_intervals(
        &self,
        intervals: &[NormalizedInterval],
    ) -> Result<(), ServiceError>;
}

pub struct HttpSchedulingBackend {
    client: reqwest::Client,
    base_url: String,
}

impl HttpSchedulingBackend {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    fn time_intervals_url(&self) -> String {
        format!("{}/users/time-intervals", self.base_url)
    }
}

#[async_trait]
impl SchedulingBackend for HttpSchedulingBackend {
    async fn submit_time_intervals(
        &self,
        intervals: &[NormalizedInterval],
    ) -> Result<(), ServiceError> {
        let url = self.time_intervals_url();
        tracing::debug!("Posting {} intervals to {}", intervals.len(), url);

        self.client
            .post(&url)
            .json(&TimeIntervalsPayload { intervals })
            .send()
            .await?
            .error_for_status()?;

        Ok(())
    }
}

/// Keeps submissions in memory instead of sending them anywhere.
///
/// Used when no backend URL is configured, and by the tests.
#[derive(Default)]
pub struct RecordingBackend {
    submissions: Mutex<Vec<Vec<NormalizedInterval>>>,
    unavailable: bool,
}

impl RecordingBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// A backend that rejects every submission.
    pub fn unavailable() -> Self {
        Self {
            submissions: Mutex::new(Vec::new()),
            unavailable: true,
        }
    }

    pub async fn submissions(&self) -> Vec<Vec<NormalizedInterval>> {
        self.submissions.lock().await.clone()
    }
}

#[async_trait]
impl SchedulingBackend for RecordingBackend {
    async fn submit_time_intervals(
        &self,
        intervals: &[NormalizedInterval],
    ) -> Result<(), ServiceError> {
        if self.unavailable {
            return Err(ServiceError::BackendError(
                "scheduling backend is unavailable".to_string(),
            ));
        }

        self.submissions.lock().await.push(intervals.to_vec());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{web, App, HttpResponse, HttpServer};
    use std::net::{SocketAddr, TcpListener};
    use std::sync::Mutex as StdMutex;

    type Received = web::Data<StdMutex<Vec<serde_json::Value>>>;

    async fn accept(body: web::Json<serde_json::Value>, received: Received) -> HttpResponse {
        received.lock().unwrap().push(body.into_inner());
        HttpResponse::Created().finish()
    }

    async fn reject() -> HttpResponse {
        HttpResponse::InternalServerError().finish()
    }

    /// Local stand-in for the scheduling backend: `/users/time-intervals`
    /// accepts, `/failing/users/time-intervals` answers 500.
    fn start_backend(received: Received) -> (SocketAddr, actix_web::dev::ServerHandle) {
        let server = HttpServer::new(move || {
            App::new()
                .app_data(received.clone())
                .route("/users/time-intervals", web::post().to(accept))
                .route("/failing/users/time-intervals", web::post().to(reject))
        })
        .workers(1)
        .bind(("127.0.0.1", 0))
        .unwrap();

        let addr = server.addrs()[0];
        let server = server.run();
        let handle = server.handle();
        actix_web::rt::spawn(server);

        (addr, handle)
    }

    fn sample_intervals() -> Vec<NormalizedInterval> {
        vec![
            NormalizedInterval {
                week_day: 1,
                start_minutes: 480,
                end_minutes: 1080,
            },
            NormalizedInterval {
                week_day: 3,
                start_minutes: 540,
                end_minutes: 600,
            },
        ]
    }

    #[test]
    fn payload_wraps_intervals() {
        let intervals = [NormalizedInterval {
            week_day: 1,
            start_minutes: 480,
            end_minutes: 1080,
        }];
        let body = serde_json::to_value(TimeIntervalsPayload {
            intervals: &intervals,
        })
        .unwrap();

        assert_eq!(
            body,
            serde_json::json!({
                "intervals": [{ "weekDay": 1, "startTimeInMinutes": 480, "endTimeInMinutes": 1080 }]
            })
        );
    }

    #[test]
    fn base_url_trailing_slash_is_ignored() {
        let backend =
            HttpSchedulingBackend::new("http://localhost:3333/api/", Duration::from_secs(1))
                .unwrap();
        assert_eq!(
            backend.time_intervals_url(),
            "http://localhost:3333/api/users/time-intervals"
        );
    }

    #[actix_web::test]
    async fn recording_backend_keeps_submissions() {
        let backend = RecordingBackend::new();
        let intervals = vec![NormalizedInterval {
            week_day: 2,
            start_minutes: 540,
            end_minutes: 600,
        }];

        backend.submit_time_intervals(&intervals).await.unwrap();

        assert_eq!(backend.submissions().await, vec![intervals]);
    }

    #[actix_web::test]
    async fn unavailable_backend_fails() {
        let backend = RecordingBackend::unavailable();
        let result = backend.submit_time_intervals(&[]).await;

        assert!(matches!(result, Err(ServiceError::BackendError(_))));
        assert!(backend.submissions().await.is_empty());
    }

    #[actix_web::test]
    async fn http_backend_posts_intervals() {
        let received: Received = web::Data::new(StdMutex::new(Vec::new()));
        let (addr, handle) = start_backend(received.clone());

        let backend =
            HttpSchedulingBackend::new(&format!("http://{}", addr), Duration::from_secs(5))
                .unwrap();
        let result = backend.submit_time_intervals(&sample_intervals()).await;

        assert!(result.is_ok());
        assert_eq!(
            received.lock().unwrap().clone(),
            vec![serde_json::json!({
                "intervals": [
                    { "weekDay": 1, "startTimeInMinutes": 480, "endTimeInMinutes": 1080 },
                    { "weekDay": 3, "startTimeInMinutes": 540, "endTimeInMinutes": 600 }
                ]
            })]
        );

        handle.stop(true).await;
    }

    #[actix_web::test]
    async fn http_backend_error_status_is_backend_error() {
        let received: Received = web::Data::new(StdMutex::new(Vec::new()));
        let (addr, handle) = start_backend(received.clone());

        let backend = HttpSchedulingBackend::new(
            &format!("http://{}/failing", addr),
            Duration::from_secs(5),
        )
        .unwrap();
        let result = backend.submit_time_intervals(&sample_intervals()).await;

        assert!(matches!(result, Err(ServiceError::BackendError(_))));
        assert!(received.lock().unwrap().is_empty());

        handle.stop(true).await;
    }

    #[actix_web::test]
    async fn http_backend_unreachable_is_backend_error() {
        // Grab a free port and release it so nothing is listening there.
        let port = TcpListener::bind("127.0.0.1:0")
            .unwrap()
            .local_addr()
            .unwrap()
            .port();

        let backend =
            HttpSchedulingBackend::new(&format!("http://127.0.0.1:{}", port), Duration::from_secs(2))
                .unwrap();
        let result = backend.submit_time_intervals(&sample_intervals()).await;

        assert!(matches!(result, Err(ServiceError::BackendError(_))));
    }
}
