use std::time::Duration;

use rand::Rng;
use typed_builder::TypedBuilder;

use crate::{
    consts::{
        DEFAULT_BASE_URL, DEFAULT_MAX_ATTEMPTS, DEFAULT_MAX_DELAY, DEFAULT_MIN_DELAY,
        DEFAULT_TIMEOUT, USER_AGENT,
    },
    error::FetchError,
};

/// Everything the [`Fetcher`](super::Fetcher) needs to know about the endpoint.
#[derive(Debug, Clone, PartialEq, Eq, TypedBuilder)]
pub struct FetchConfig {
    #[builder(default = DEFAULT_BASE_URL.to_owned(), setter(into))]
    pub base_url: String,
    #[builder(default = USER_AGENT.to_owned(), setter(into))]
    pub user_agent: String,
    #[builder(default = DEFAULT_MAX_ATTEMPTS)]
    pub max_attempts: u32,
    /// Per request.
    #[builder(default = DEFAULT_TIMEOUT)]
    pub timeout: Duration,
    /// Lower bound of the pause taken before every attempt.
    #[builder(default = DEFAULT_MIN_DELAY)]
    pub min_delay: Duration,
    /// Upper bound of the pause taken before every attempt.
    #[builder(default = DEFAULT_MAX_DELAY)]
    pub max_delay: Duration,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl FetchConfig {
    pub fn validate(&self) -> Result<(), FetchError> {
        if self.min_delay > self.max_delay {
            return Err(FetchError::InvalidConfig(format!(
                "min_delay ({:?}) is greater than max_delay ({:?})",
                self.min_delay, self.max_delay
            )));
        }

        if self.base_url.is_empty() {
            return Err(FetchError::InvalidConfig("base_url is empty".to_owned()));
        }

        Ok(())
    }

    /// Uniformly random pause in `[min_delay, max_delay]`, drawn fresh every call.
    pub fn pick_delay(&self) -> Duration {
        if self.min_delay >= self.max_delay {
            return self.min_delay;
        }

        let secs = rand::thread_rng()
            .gen_range(self.min_delay.as_secs_f64()..=self.max_delay.as_secs_f64());
        Duration::from_secs_f64(secs)
    }
}
