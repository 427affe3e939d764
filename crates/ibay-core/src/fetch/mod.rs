pub use config::FetchConfig;

use reqwest::{header, Client};
use tracing::{debug, error, info};

use crate::{
    consts::CATEGORY_PAGE,
    error::FetchError,
    model::{CategoryId, RawNode},
    source::CategorySource,
    url::Builder,
};

pub mod config;

/// Retrying HTTP client for the category listing endpoint.
#[derive(Debug, Clone)]
pub struct Fetcher {
    client: Client,
    config: FetchConfig,
}

impl Fetcher {
    pub fn new(config: FetchConfig) -> Result<Self, FetchError> {
        config.validate()?;

        let client = Client::builder()
            .timeout(config.timeout)
            .build()?;

        Ok(Self { client, config })
    }

    pub fn category_url(&self, id: &CategoryId) -> String {
        Builder::new(&self.config.base_url)
            .add_parameter("page", CATEGORY_PAGE)
            .add_parameter("id", id.as_str())
            .build()
    }

    /// A single request, without the politeness delay.
    pub async fn try_fetch(&self, id: &CategoryId) -> Result<RawNode, FetchError> {
        let url = self.category_url(id);

        let response = self
            .client
            .get(&url)
            .header(header::USER_AGENT, &self.config.user_agent)
            .send()
            .await?
            .error_for_status()
            .map_err(FetchError::Http)?;

        let body = response.text().await?;
        if body.is_empty() {
            return Err(FetchError::EmptyBody { url });
        }

        decode_raw_node(&body)
    }

    /// Fetch the children of `id`, retrying every kind of failure.
    ///
    /// After `max_attempts` failures this gives up and returns an empty listing,
    /// which is indistinguishable from a category that has no children.
    #[tracing::instrument(skip(self, id), fields(id = %id, max_attempts = self.config.max_attempts))]
    pub async fn fetch(&self, id: &CategoryId) -> RawNode {
        let max_attempts = self.config.max_attempts;

        for attempt in 1..=max_attempts {
            let delay = self.config.pick_delay();
            debug!("Sleeping for {delay:?}");
            tokio::time::sleep(delay).await;

            match self.try_fetch(id).await {
                Ok(node) => return node,
                Err(err) => {
                    error!("{err}");
                    match follow_up(&err, attempt, max_attempts) {
                        Some(FollowUp::Retry) => {
                            info!("Retrying... Attempt {attempt} of {max_attempts}");
                        }
                        Some(FollowUp::GiveUp) => error!("Max attempts reached. Giving up."),
                        None => {}
                    }
                }
            }
        }

        RawNode::new()
    }
}

#[async_trait::async_trait]
impl CategorySource for Fetcher {
    async fn children(&self, id: &CategoryId) -> RawNode {
        self.fetch(id).await
    }
}

/// What gets logged after a failed attempt, on top of the error itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FollowUp {
    Retry,
    GiveUp,
}

/// HTTP status failures are reported by the error line alone. They are
/// still retried.
pub fn follow_up(err: &FetchError, attempt: u32, max_attempts: u32) -> Option<FollowUp> {
    if err.is_http_status() {
        return None;
    }

    if attempt < max_attempts {
        Some(FollowUp::Retry)
    } else {
        Some(FollowUp::GiveUp)
    }
}

pub(crate) fn decode_raw_node(body: &str) -> Result<RawNode, FetchError> {
    let mut deserializer = serde_json::Deserializer::from_str(body);

    let node = serde_path_to_error::deserialize(&mut deserializer).map_err(|e| {
        FetchError::Decode {
            path: e.path().to_string(),
            message: e.into_inner().to_string(),
        }
    })?;

    deserializer.end().map_err(|e| FetchError::Decode {
        path: ".".to_owned(),
        message: e.to_string(),
    })?;

    Ok(node)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_listing() {
        let node = decode_raw_node(r#"[{"5501":"Full Time"},{"5502":"Part Time"}]"#).unwrap();

        assert_eq!(node.len(), 2);
        assert_eq!(node[1].get(&CategoryId::from("5502")).map(String::as_str), Some("Part Time"));
    }

    #[test]
    fn empty_listing() {
        assert!(decode_raw_node("[]").unwrap().is_empty());
    }

    #[test]
    fn rejects_malformed_bodies() {
        for body in ["<html></html>", "[{\"1\":\"A\"}", "[] trailing", "{\"1\":\"A\"}", "[{\"1\":2}]"] {
            assert!(
                matches!(decode_raw_node(body), Err(FetchError::Decode { .. })),
                "{body}"
            );
        }
    }

    #[test]
    fn decode_error_reports_path() {
        let Err(FetchError::Decode { path, .. }) = decode_raw_node(r#"[{"1":"A"},{"2":false}]"#)
        else {
            panic!("expected a decode error");
        };

        assert!(path.starts_with("[1]"), "{path}");
    }

    #[test]
    fn follow_up_after_failure() {
        let err = FetchError::EmptyBody { url: "http://localhost".to_owned() };

        assert_eq!(follow_up(&err, 1, 5), Some(FollowUp::Retry));
        assert_eq!(follow_up(&err, 4, 5), Some(FollowUp::Retry));
        assert_eq!(follow_up(&err, 5, 5), Some(FollowUp::GiveUp));

        let err = decode_raw_node("nope").unwrap_err();
        assert_eq!(follow_up(&err, 1, 1), Some(FollowUp::GiveUp));
    }

    #[test]
    fn category_url_uses_base_url() {
        let fetcher = Fetcher::new(FetchConfig::default()).unwrap();

        assert_eq!(
            fetcher.category_url(&CategoryId::from("600")),
            "https://ibay.com.mv/index.php?page=cat_ajax&id=600"
        );
    }
}
