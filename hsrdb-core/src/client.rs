//! Read-only HTTP query client
//!
//! One thin wrapper over `reqwest` serving every dataset endpoint. The
//! request flow is uniform: build URL, send, check status, read text,
//! decode JSON. Domain dispatch is centralized here so the five search
//! panels share a single code path.

use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::time::Duration;

use crate::error::{CoreError, CoreResult};
use crate::lang::Lang;
use crate::types::{
    AvatarDetail, DetailKey, Domain, DomainDetail, DomainPage, Facets, ItemDetail, MissionDetail,
    MonsterDetail, SearchQuery, Stats, TermReply,
};

/// Client configuration.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Base URL of the dataset service, without a trailing slash
    pub base_url: String,
    pub timeout: Duration,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: "http://127.0.0.1:8787".to_string(),
            timeout: Duration::from_secs(15),
        }
    }
}

/// Detail endpoints answer HTTP 200 with `{"error": ...}` for unknown
/// ids; the untagged enum routes that to an API error before the real
/// payload is tried.
#[derive(Deserialize)]
#[serde(untagged)]
enum ApiReply<T> {
    Err { error: String },
    Ok(T),
}

/// Read-only client for the dataset API.
#[derive(Debug, Clone)]
pub struct QueryClient {
    http: reqwest::Client,
    base_url: String,
}

impl QueryClient {
    pub fn new(config: &ApiConfig) -> CoreResult<Self> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| CoreError::Network(e.to_string()))?;
        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Unified GET: send, check status, read text, decode.
    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> CoreResult<T> {
        let url = format!("{}{path}", self.base_url);
        log::debug!("GET {url} {query:?}");

        let response = self
            .http
            .get(&url)
            .query(query)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    CoreError::Timeout(e.to_string())
                } else {
                    CoreError::Network(e.to_string())
                }
            })?;

        let status = response.status();
        log::debug!("GET {url} -> {}", status.as_u16());
        if !status.is_success() {
            return Err(CoreError::Status {
                status: status.as_u16(),
                message: status
                    .canonical_reason()
                    .unwrap_or("request failed")
                    .to_string(),
            });
        }

        let text = response
            .text()
            .await
            .map_err(|e| CoreError::Network(e.to_string()))?;
        serde_json::from_str(&text).map_err(|e| CoreError::Parse(e.to_string()))
    }

    /// GET for endpoints that report misses as `{"error": ...}` with 200.
    async fn get_api<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> CoreResult<T> {
        match self.get_json::<ApiReply<T>>(path, query).await? {
            ApiReply::Ok(value) => Ok(value),
            ApiReply::Err { error } => Err(CoreError::Api(error)),
        }
    }

    /// Run one search. The returned page is already normalized.
    pub async fn search(&self, domain: Domain, query: &SearchQuery) -> CoreResult<DomainPage> {
        let mut params: Vec<(&str, String)> = vec![
            ("q", query.q.clone()),
            ("lang", query.lang.code().to_string()),
            ("page", query.page.to_string()),
            ("page_size", query.page_size.to_string()),
        ];
        for (key, value) in &query.filters {
            if !value.is_empty() {
                params.push((key.as_str(), value.clone()));
            }
        }
        let path = format!("/api/search/{}", domain.as_str());
        Ok(match domain {
            Domain::Avatar => DomainPage::Avatar(self.get_json(&path, &params).await?),
            Domain::Dialogue => DomainPage::Dialogue(self.get_json(&path, &params).await?),
            Domain::Mission => DomainPage::Mission(self.get_json(&path, &params).await?),
            Domain::Item => DomainPage::Item(self.get_json(&path, &params).await?),
            Domain::Monster => DomainPage::Monster(self.get_json(&path, &params).await?),
        })
    }

    /// Fetch one detail payload.
    pub async fn detail(
        &self,
        domain: Domain,
        key: DetailKey,
        lang: Lang,
        page_size: u32,
    ) -> CoreResult<DomainDetail> {
        let lang_param = ("lang", lang.code().to_string());
        match (domain, key) {
            (Domain::Avatar, DetailKey::Id(id)) => {
                let detail: AvatarDetail = self
                    .get_api(&format!("/api/avatar/{id}"), &[lang_param])
                    .await?;
                Ok(DomainDetail::Avatar(Box::new(detail)))
            }
            (Domain::Mission, DetailKey::Id(id)) => {
                let detail: MissionDetail = self
                    .get_api(&format!("/api/mission/{id}"), &[lang_param])
                    .await?;
                Ok(DomainDetail::Mission(Box::new(detail)))
            }
            (Domain::Item, DetailKey::Id(id)) => {
                let detail: ItemDetail = self
                    .get_api(&format!("/api/item/{id}"), &[lang_param])
                    .await?;
                Ok(DomainDetail::Item(Box::new(detail)))
            }
            (Domain::Monster, DetailKey::Id(id)) => {
                let detail: MonsterDetail = self
                    .get_api(&format!("/api/monster/{id}"), &[lang_param])
                    .await?;
                Ok(DomainDetail::Monster(Box::new(detail)))
            }
            (
                Domain::Dialogue,
                DetailKey::DialogueRefs {
                    talk_sentence_id,
                    page,
                },
            ) => {
                let refs: crate::types::DialogueRefs = self
                    .get_api(
                        &format!("/api/dialogue/{talk_sentence_id}/refs"),
                        &[
                            ("page", page.to_string()),
                            ("page_size", page_size.to_string()),
                        ],
                    )
                    .await?;
                Ok(DomainDetail::Dialogue(refs.normalize()))
            }
            (domain, key) => Err(CoreError::Api(format!(
                "unsupported detail key {key:?} for {}",
                domain.as_str()
            ))),
        }
    }

    /// Facet value lists for item/monster filters.
    pub async fn facets(&self, domain: Domain) -> CoreResult<Facets> {
        if !domain.has_facets() {
            return Ok(Facets::default());
        }
        self.get_json(&format!("/api/{}/facets", domain.as_str()), &[])
            .await
    }

    /// Glossary term lookup. `module` scopes the text search to one
    /// domain's database when set.
    pub async fn explain_term(
        &self,
        term: &str,
        lang: Lang,
        limit: u32,
        module: Option<Domain>,
    ) -> CoreResult<TermReply> {
        let mut params = vec![
            ("term", term.to_string()),
            ("lang", lang.code().to_string()),
            ("limit", limit.to_string()),
        ];
        if let Some(module) = module {
            params.push(("module", module.as_str().to_string()));
        }
        self.get_json("/api/term/explain", &params).await
    }

    /// Aggregate dataset statistics.
    pub async fn stats(&self) -> CoreResult<Stats> {
        self.get_json("/api/stats", &[]).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_default_points_at_local_service() {
        let config = ApiConfig::default();
        assert_eq!(config.base_url, "http://127.0.0.1:8787");
    }

    #[test]
    fn base_url_trailing_slash_is_trimmed() {
        let client = QueryClient::new(&ApiConfig {
            base_url: "http://localhost:8787/".to_string(),
            ..ApiConfig::default()
        })
        .unwrap();
        assert_eq!(client.base_url, "http://localhost:8787");
    }

    #[test]
    fn api_reply_error_takes_priority() {
        let reply: ApiReply<Stats> =
            serde_json::from_str(r#"{"error": "not_found", "item_id": 99}"#).unwrap();
        assert!(matches!(reply, ApiReply::Err { ref error } if error == "not_found"));

        let reply: ApiReply<Stats> =
            serde_json::from_str(r#"{"table_counts": {"avatar": 3}, "monster_count": 1}"#).unwrap();
        assert!(matches!(reply, ApiReply::Ok(_)));
    }

    #[tokio::test]
    async fn network_failure_maps_to_network_error() {
        // Port 1 on localhost refuses connections.
        let client = QueryClient::new(&ApiConfig {
            base_url: "http://127.0.0.1:1".to_string(),
            timeout: Duration::from_millis(500),
        })
        .unwrap();
        let err = client.stats().await.unwrap_err();
        assert!(matches!(
            err,
            CoreError::Network(_) | CoreError::Timeout(_)
        ));
    }
}
