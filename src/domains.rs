use std::time::Duration;

use futures::future::join_all;
use serde::Deserialize;

use crate::metrics::DOMAIN_LOOKUPS;
use crate::models::{GeneratedName, NameCandidate};

const NXDOMAIN: i32 = 3;
const NOERROR: i32 = 0;

// Subset of the DoH JSON answer we care about. Only the answer count
// matters, not the record contents.
#[derive(Deserialize)]
struct DnsResponse {
    #[serde(rename = "Status")]
    status: i32,
    #[serde(rename = "Answer", default)]
    answer: Vec<serde_json::Value>,
}

// Best-effort domain availability via a DNS-over-HTTPS resolver. DNS
// presence stands in for registration status, so the answer is a hint:
// ambiguity and every failure resolve to "available", and registration
// downstream is the authoritative check.
pub struct DomainOracle {
    client: reqwest::Client,
    doh_url: String,
    timeout: Duration,
}

impl DomainOracle {
    pub fn new(client: reqwest::Client, doh_url: String, timeout: Duration) -> Self {
        Self {
            client,
            doh_url,
            timeout,
        }
    }

    async fn resolve(&self, domain: &str, record: &str) -> Result<DnsResponse, reqwest::Error> {
        DOMAIN_LOOKUPS.inc();

        self.client
            .get(&self.doh_url)
            .query(&[("name", domain), ("type", record)])
            .header("Accept", "application/dns-json")
            .timeout(self.timeout)
            .send()
            .await?
            .json()
            .await
    }

    // NXDOMAIN = available, NOERROR with answers = taken. Anything else
    // falls through to an NS lookup with the same rules, then to
    // "available".
    async fn lookup(&self, domain: &str) -> Result<bool, reqwest::Error> {
        let a = self.resolve(domain, "A").await?;
        if a.status == NXDOMAIN {
            return Ok(true);
        }
        if a.status == NOERROR && !a.answer.is_empty() {
            return Ok(false);
        }

        let ns = self.resolve(domain, "NS").await?;
        if ns.status == NXDOMAIN {
            return Ok(true);
        }
        if !ns.answer.is_empty() {
            return Ok(false);
        }

        Ok(true)
    }

    // Never fails: transport errors, timeouts, and undecodable responses
    // all count as available.
    pub async fn check(&self, domain: &str) -> bool {
        match self.lookup(domain).await {
            Ok(available) => available,
            Err(e) => {
                tracing::debug!(domain, error = %e, "DNS lookup failed, assuming available");
                true
            }
        }
    }

    // One concurrent lookup per candidate, joined before returning.
    // The response waits for every check; no partial results.
    pub async fn check_all(&self, candidates: Vec<NameCandidate>) -> Vec<GeneratedName> {
        let checks = candidates.into_iter().map(|candidate| async move {
            let available = self.check(&candidate.domain).await;
            GeneratedName {
                name: candidate.name,
                domain: candidate.domain,
                tagline: candidate.tagline,
                available,
            }
        });

        join_all(checks).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;
    use serde_json::json;

    fn oracle(doh_url: String) -> DomainOracle {
        DomainOracle::new(reqwest::Client::new(), doh_url, Duration::from_secs(2))
    }

    fn answer_record(domain: &str, data: &str) -> serde_json::Value {
        json!({"name": domain, "type": 1, "TTL": 300, "data": data})
    }

    #[tokio::test]
    async fn nxdomain_means_available() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET)
                    .path("/resolve")
                    .query_param("name", "fresh-name.com")
                    .query_param("type", "A");
                then.status(200).json_body(json!({"Status": 3}));
            })
            .await;

        assert!(oracle(server.url("/resolve")).check("fresh-name.com").await);
    }

    #[tokio::test]
    async fn answered_a_record_means_taken() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET)
                    .path("/resolve")
                    .query_param("name", "google.com")
                    .query_param("type", "A");
                then.status(200).json_body(json!({
                    "Status": 0,
                    "Answer": [answer_record("google.com", "142.250.1.1")]
                }));
            })
            .await;

        assert!(!oracle(server.url("/resolve")).check("google.com").await);
    }

    #[tokio::test]
    async fn empty_a_answer_falls_back_to_ns() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET)
                    .path("/resolve")
                    .query_param("name", "parked.com")
                    .query_param("type", "A");
                then.status(200).json_body(json!({"Status": 0}));
            })
            .await;
        let ns = server
            .mock_async(|when, then| {
                when.method(GET)
                    .path("/resolve")
                    .query_param("name", "parked.com")
                    .query_param("type", "NS");
                then.status(200).json_body(json!({
                    "Status": 0,
                    "Answer": [answer_record("parked.com", "ns1.parking.example.")]
                }));
            })
            .await;

        assert!(!oracle(server.url("/resolve")).check("parked.com").await);
        ns.assert_async().await;
    }

    #[tokio::test]
    async fn still_ambiguous_after_ns_means_available() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/resolve").query_param("type", "A");
                then.status(200).json_body(json!({"Status": 2}));
            })
            .await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/resolve").query_param("type", "NS");
                then.status(200).json_body(json!({"Status": 2}));
            })
            .await;

        assert!(oracle(server.url("/resolve")).check("limbo.com").await);
    }

    #[tokio::test]
    async fn lookup_failure_means_available() {
        // nothing listening on this port
        assert!(
            oracle("http://127.0.0.1:1/resolve".to_string())
                .check("whatever.com")
                .await
        );
    }

    #[tokio::test]
    async fn undecodable_resolver_response_means_available() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/resolve");
                then.status(200).body("<html>resolver maintenance</html>");
            })
            .await;

        assert!(oracle(server.url("/resolve")).check("whatever.com").await);
    }

    #[tokio::test]
    async fn check_all_preserves_order_and_joins_every_lookup() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET)
                    .path("/resolve")
                    .query_param("name", "taken.com")
                    .query_param("type", "A");
                then.status(200).json_body(json!({
                    "Status": 0,
                    "Answer": [answer_record("taken.com", "1.2.3.4")]
                }));
            })
            .await;
        server
            .mock_async(|when, then| {
                when.method(GET)
                    .path("/resolve")
                    .query_param("name", "open.com")
                    .query_param("type", "A");
                then.status(200).json_body(json!({"Status": 3}));
            })
            .await;

        let candidates = vec![
            NameCandidate {
                name: "Taken".to_string(),
                domain: "taken.com".to_string(),
                tagline: "t".to_string(),
            },
            NameCandidate {
                name: "Open".to_string(),
                domain: "open.com".to_string(),
                tagline: "o".to_string(),
            },
        ];

        let names = oracle(server.url("/resolve")).check_all(candidates).await;

        assert_eq!(names.len(), 2);
        assert_eq!(names[0].domain, "taken.com");
        assert!(!names[0].available);
        assert_eq!(names[1].domain, "open.com");
        assert!(names[1].available);
    }
}
