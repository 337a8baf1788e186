use crate::datatable::DomainTable;
use crate::payload::RecordPayload;
use crate::reporter::Reporter;
use anyhow::{anyhow, Context, Result};
use serde_json::Value;

/// Blocking client for the statistics web API.
#[derive(Clone)]
pub struct ApiClient {
    url: String,
    client: reqwest::blocking::Client,
}

impl ApiClient {
    pub fn new(url: &str) -> Self {
        Self {
            url: url.to_string(),
            client: reqwest::blocking::Client::new(),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Issue the GET request and parse the body as JSON.
    pub fn fetch_json(&self) -> Result<Value> {
        let response = self
            .client
            .get(&self.url)
            .send()
            .with_context(|| format!("request to {} failed", self.url))?;

        let status = response.status();
        if !status.is_success() {
            return Err(anyhow!("API returned status {}", status));
        }

        let root: Value = response
            .json()
            .context("response body is not valid JSON")?;
        Ok(root)
    }

    /// Fetch and normalize in one step.
    ///
    /// Every failure is reported through `reporter` and degrades to `None`;
    /// this method never propagates an error to the caller.
    pub fn fetch_domain_table(&self, reporter: &dyn Reporter) -> Option<DomainTable> {
        tracing::debug!(target: "fetch", "requesting {}", self.url);

        let root = match self.fetch_json() {
            Ok(root) => root,
            Err(e) => {
                tracing::warn!(target: "fetch", "request failed: {:#}", e);
                reporter.report(&format!("Error accessing API: {:#}", e));
                return None;
            }
        };

        build_domain_table(root, reporter)
    }
}

/// Normalize a parsed JSON root into a domain table.
///
/// Returns `None` for every degenerate shape: unrecognized root, empty or
/// missing record list, malformed records. Each case reports a message.
pub fn build_domain_table(root: Value, reporter: &dyn Reporter) -> Option<DomainTable> {
    let records = match RecordPayload::from_root(root) {
        RecordPayload::Records(records) => records,
        RecordPayload::Unrecognized => {
            reporter.report("Unrecognized JSON data format.");
            return None;
        }
    };

    if records.is_empty() {
        reporter.report("No domain records found.");
        return None;
    }

    match DomainTable::from_records(&records) {
        Ok(table) => {
            tracing::info!(target: "fetch", "built domain table with {} rows", table.row_count());
            Some(table)
        }
        Err(e) => {
            tracing::warn!(target: "fetch", "normalization failed: {:#}", e);
            reporter.report(&format!(
                "JSON format does not match the expected record shape: {:#}",
                e
            ));
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reporter::CapturingReporter;
    use serde_json::json;

    fn nested_root() -> Value {
        json!({
            "data": {
                "domain": [
                    {"domain_id": "0000", "domain_name": "Badan Pusat Statistik", "domain_url": "https://www.bps.go.id"},
                    {"domain_id": "1100", "domain_name": "Provinsi Aceh", "domain_url": "https://aceh.bps.go.id"},
                ]
            }
        })
    }

    #[test]
    fn test_nested_root_builds_table() {
        let reporter = CapturingReporter::new();

        let table = build_domain_table(nested_root(), &reporter).expect("table should be built");

        assert_eq!(table.row_count(), 2);
        assert_eq!(table.get(0).unwrap().domain_nama, "Badan Pusat Statistik");
        assert_eq!(table.get(1).unwrap().domain_id, "1100");
        assert!(reporter.is_empty());
    }

    #[test]
    fn test_bare_list_root_builds_table() {
        let reporter = CapturingReporter::new();
        let root = json!([
            {"domain_id": "1100", "domain_name": "Provinsi Aceh", "domain_url": "https://aceh.bps.go.id"},
        ]);

        let table = build_domain_table(root, &reporter).expect("table should be built");

        assert_eq!(table.row_count(), 1);
        assert!(reporter.is_empty());
    }

    #[test]
    fn test_missing_record_list_yields_no_data() {
        for root in [json!({}), json!({"data": {}})] {
            let reporter = CapturingReporter::new();
            assert!(build_domain_table(root, &reporter).is_none());
            assert!(reporter.contains("No domain records found"));
        }
    }

    #[test]
    fn test_empty_record_list_yields_no_data() {
        let reporter = CapturingReporter::new();

        assert!(build_domain_table(json!({"data": {"domain": []}}), &reporter).is_none());
        assert!(reporter.contains("No domain records found"));
    }

    #[test]
    fn test_scalar_root_is_unrecognized() {
        for root in [json!("a string"), json!(12345)] {
            let reporter = CapturingReporter::new();
            assert!(build_domain_table(root, &reporter).is_none());
            assert!(reporter.contains("Unrecognized JSON data format"));
        }
    }

    #[test]
    fn test_malformed_record_yields_no_data() {
        let reporter = CapturingReporter::new();
        let root = json!({"data": {"domain": [
            {"domain_id": "1100", "domain_url": "https://aceh.bps.go.id"},
        ]}});

        assert!(build_domain_table(root, &reporter).is_none());
        assert!(reporter.contains("does not match the expected record shape"));
    }

    #[test]
    fn test_error_status_yields_no_data() {
        use std::io::{Read, Write};
        use std::net::TcpListener;

        let listener = TcpListener::bind("127.0.0.1:0").expect("bind test listener");
        let addr = listener.local_addr().unwrap();
        let server = std::thread::spawn(move || {
            let (mut stream, _) = listener.accept().expect("accept");
            let mut buf = [0u8; 1024];
            let _ = stream.read(&mut buf);
            let _ = stream
                .write_all(b"HTTP/1.1 500 Internal Server Error\r\nContent-Length: 0\r\n\r\n");
        });

        let reporter = CapturingReporter::new();
        let client = ApiClient::new(&format!("http://{}", addr));

        assert!(client.fetch_domain_table(&reporter).is_none());
        assert!(reporter.contains("Error accessing API"));
        assert!(reporter.contains("500"));
        server.join().unwrap();
    }

    #[test]
    fn test_connection_failure_yields_no_data() {
        let reporter = CapturingReporter::new();
        // Port 9 (discard) has no listener; the request fails immediately.
        let client = ApiClient::new("http://127.0.0.1:9/unreachable");

        assert!(client.fetch_domain_table(&reporter).is_none());
        assert!(reporter.contains("Error accessing API"));
    }
}
