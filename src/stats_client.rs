//! # Feature: Stats Client
//!
//! One HTTP GET per rank command against the configured Rocket League or
//! Valorant stats API.
//!
//! - **Version**: 1.0.0
//! - **Since**: 0.1.0
//! - **Toggleable**: false
//!
//! ## Changelog
//! - 1.0.0: Rocket League and Valorant lookups with a per-call deadline

use anyhow::Context as _;
use log::{debug, info};
use reqwest::Url;
use serenity::async_trait;
use std::time::Duration;

use crate::error::RankError;
use crate::models::{RankQuery, RankResult, RocketLeagueProfile, ValorantResponse};

/// Anything able to resolve a [`RankQuery`]. Handlers only see this trait.
#[async_trait]
pub trait RankSource: Send + Sync {
    async fn fetch(&self, query: &RankQuery) -> Result<RankResult, RankError>;
}

#[derive(Clone)]
pub struct StatsClient {
    client: reqwest::Client,
    rl_base: Url,
    val_base: Url,
    timeout: Duration,
}

impl StatsClient {
    pub fn new(rl_base: &str, val_base: &str, timeout: Duration) -> anyhow::Result<Self> {
        Ok(StatsClient {
            client: reqwest::Client::new(),
            rl_base: parse_base(rl_base).context("Invalid RL_API base URL")?,
            val_base: parse_base(val_base).context("Invalid VAL_API base URL")?,
            timeout,
        })
    }

    /// Full request URL for a query.
    pub fn url_for(&self, query: &RankQuery) -> Url {
        match query {
            RankQuery::RocketLeague { platform, username } => {
                let mut url = join_segments(&self.rl_base, &[platform.as_str(), username.as_str()]);
                url.query_pairs_mut().append_pair("raw", "true");
                url
            }
            RankQuery::Valorant { region, username, tag } => {
                join_segments(&self.val_base, &[region.as_str(), username.as_str(), tag.as_str()])
            }
        }
    }

    async fn get_body(&self, url: Url) -> Result<String, RankError> {
        let request = async {
            let response = self.client.get(url.clone()).send().await?;
            debug!("Stats API responded {} for {}", response.status(), url);
            Ok::<_, reqwest::Error>(response.text().await?)
        };

        match tokio::time::timeout(self.timeout, request).await {
            Ok(body) => Ok(body?),
            Err(_) => Err(RankError::Cancelled(self.timeout)),
        }
    }
}

#[async_trait]
impl RankSource for StatsClient {
    async fn fetch(&self, query: &RankQuery) -> Result<RankResult, RankError> {
        let url = self.url_for(query);
        info!("Fetching rank for {} from {}", query.username(), url.host_str().unwrap_or("stats API"));

        let body = self.get_body(url).await?;

        match query {
            RankQuery::RocketLeague { .. } => {
                let profile: RocketLeagueProfile = serde_json::from_str(&body)?;
                Ok(RankResult::RocketLeague(profile))
            }
            RankQuery::Valorant { .. } => {
                let response: ValorantResponse = serde_json::from_str(&body)?;
                if response.data.name.is_empty() {
                    return Err(RankError::PlayerNotFound);
                }
                Ok(RankResult::Valorant(response.data))
            }
        }
    }
}

fn parse_base(raw: &str) -> anyhow::Result<Url> {
    let url = Url::parse(raw.trim())?;
    if url.cannot_be_a_base() {
        anyhow::bail!("{} cannot be used as a base URL", raw);
    }
    Ok(url)
}

fn join_segments(base: &Url, segments: &[&str]) -> Url {
    let mut url = base.clone();
    url.set_query(None);
    // parse_base rejected cannot-be-a-base URLs, so this always succeeds
    if let Ok(mut path) = url.path_segments_mut() {
        path.pop_if_empty().extend(segments);
    }
    url
}
