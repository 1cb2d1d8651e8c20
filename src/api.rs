use crate::models::{Record, RecordPayload, Stats};
use reqwest::Client;

/// Client for the remote records API. The API is unauthenticated; writes
/// carry a JSON body and `Content-Type: application/json`, nothing else.
#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into(),
        }
    }

    /// The list endpoint may answer `null` instead of `[]`; both mean an
    /// empty set.
    pub async fn list_records(&self) -> Result<Vec<Record>, reqwest::Error> {
        let records = self
            .client
            .get(format!("{}/records", self.base_url))
            .send()
            .await?
            .json::<Option<Vec<Record>>>()
            .await?;
        Ok(records.unwrap_or_default())
    }

    pub async fn fetch_stats(&self) -> Result<Stats, reqwest::Error> {
        self.client
            .get(format!("{}/stats", self.base_url))
            .send()
            .await?
            .json::<Stats>()
            .await
    }

    // Response status is not checked on writes; the refresh that follows a
    // write shows whatever the server kept.
    pub async fn create_record(&self, payload: &RecordPayload) -> Result<(), reqwest::Error> {
        self.client
            .post(format!("{}/records", self.base_url))
            .json(payload)
            .send()
            .await?;
        Ok(())
    }

    pub async fn update_record(
        &self,
        id: i64,
        payload: &RecordPayload,
    ) -> Result<(), reqwest::Error> {
        self.client
            .put(format!("{}/records/{id}", self.base_url))
            .json(payload)
            .send()
            .await?;
        Ok(())
    }

    pub async fn delete_record(&self, id: i64) -> Result<(), reqwest::Error> {
        self.client
            .delete(format!("{}/records/{id}", self.base_url))
            .send()
            .await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::Matcher;

    fn payload() -> RecordPayload {
        RecordPayload {
            date: "2026-08-06".to_string(),
            content: "run".to_string(),
            duration: 30,
            notes: String::new(),
        }
    }

    #[tokio::test]
    async fn list_records_parses_array() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/records")
            .with_header("content-type", "application/json")
            .with_body(
                r#"[{"id":1,"date":"2026-08-01","content":"reading","duration":30,"notes":"ch. 4"}]"#,
            )
            .create_async()
            .await;

        let client = ApiClient::new(server.url());
        let records = client.list_records().await.unwrap();

        mock.assert_async().await;
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].id, 1);
        assert_eq!(records[0].content, "reading");
        assert_eq!(records[0].notes, "ch. 4");
    }

    #[tokio::test]
    async fn list_records_treats_null_as_empty() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/records")
            .with_header("content-type", "application/json")
            .with_body("null")
            .create_async()
            .await;

        let client = ApiClient::new(server.url());
        let records = client.list_records().await.unwrap();
        assert!(records.is_empty());
    }

    #[tokio::test]
    async fn fetch_stats_ignores_extra_fields() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/stats")
            .with_header("content-type", "application/json")
            .with_body(r#"{"totalRecords":3,"totalDuration":120,"thisWeek":2,"thisMonth":3}"#)
            .create_async()
            .await;

        let client = ApiClient::new(server.url());
        let stats = client.fetch_stats().await.unwrap();
        assert_eq!(stats.total_records, 3);
        assert_eq!(stats.total_duration, 120);
    }

    #[tokio::test]
    async fn create_posts_json_payload() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/records")
            .match_header("content-type", "application/json")
            .match_body(Matcher::Json(serde_json::json!({
                "date": "2026-08-06",
                "content": "run",
                "duration": 30,
                "notes": ""
            })))
            .create_async()
            .await;

        let client = ApiClient::new(server.url());
        client.create_record(&payload()).await.unwrap();
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn update_puts_to_record_path() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("PUT", "/records/7")
            .match_header("content-type", "application/json")
            .match_body(Matcher::JsonString(
                serde_json::to_string(&payload()).unwrap(),
            ))
            .create_async()
            .await;

        let client = ApiClient::new(server.url());
        client.update_record(7, &payload()).await.unwrap();
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn delete_targets_record_path() {
        let mut server = mockito::Server::new_async().await;
        let mock = server.mock("DELETE", "/records/7").create_async().await;

        let client = ApiClient::new(server.url());
        client.delete_record(7).await.unwrap();
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn write_status_is_not_checked() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("POST", "/records")
            .with_status(500)
            .create_async()
            .await;

        let client = ApiClient::new(server.url());
        assert!(client.create_record(&payload()).await.is_ok());
    }
}
