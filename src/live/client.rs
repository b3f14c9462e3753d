//! HTTP client for the live data endpoints

use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use serde::de::DeserializeOwned;
use tracing::debug;

use super::model::{
    self, LiveFeedWire, LiveMatch, PlayerProfile, PlayerSearchHit, ProfileWire, Scorecard,
    ScorecardWire, SearchWire, StatsTable, StatsWire,
};
use crate::config::LiveApiConfig;
use crate::error::{LiveError, Result, StumpsError};

const API_KEY_HEADER: HeaderName = HeaderName::from_static("x-rapidapi-key");
const API_HOST_HEADER: HeaderName = HeaderName::from_static("x-rapidapi-host");

/// Client for live matches, scorecards and player stats.
///
/// Authentication headers are attached to every request by the underlying
/// client; the key is marked sensitive so it never shows up in debug
/// output. Live data is fetched fresh on every call.
pub struct LiveClient {
    config: LiveApiConfig,
    client: reqwest::Client,
}

impl LiveClient {
    pub fn new(config: LiveApiConfig) -> Result<Self> {
        let mut key = HeaderValue::from_str(&config.api_key)
            .map_err(|_| StumpsError::config("RAPIDAPI_KEY is not a valid header value"))?;
        key.set_sensitive(true);
        let host = HeaderValue::from_str(&config.api_host)
            .map_err(|_| StumpsError::config("API host is not a valid header value"))?;

        let mut headers = HeaderMap::new();
        headers.insert(API_KEY_HEADER, key);
        headers.insert(API_HOST_HEADER, host);

        let client = reqwest::Client::builder()
            .timeout(Duration::from_millis(config.timeout_ms))
            .default_headers(headers)
            .build()
            .map_err(|e| StumpsError::config(format!("failed to build HTTP client: {e}")))?;

        Ok(Self { config, client })
    }

    /// All matches currently in the live feed, flattened in feed order.
    pub async fn list_live_matches(&self) -> Result<Vec<LiveMatch>> {
        let url = format!("{}/matches/v1/live", self.config.base_url());
        let feed: LiveFeedWire = self.fetch_json(&url, &[]).await?;
        Ok(model::flatten_feed(feed))
    }

    /// Full scorecard for one match.
    pub async fn scorecard(&self, match_id: i64) -> Result<Scorecard> {
        let url = format!("{}/mcenter/v1/{}/scard", self.config.base_url(), match_id);
        let wire: ScorecardWire = self.fetch_json(&url, &[]).await?;
        Ok(model::flatten_scorecard(wire))
    }

    /// Search players by name fragment.
    pub async fn search_players(&self, name: &str) -> Result<Vec<PlayerSearchHit>> {
        let url = format!("{}/stats/v1/player/search", self.config.base_url());
        let wire: SearchWire = self.fetch_json(&url, &[("plrN", name)]).await?;
        Ok(model::flatten_search(wire))
    }

    /// Profile and ranking cards for one player.
    pub async fn player_profile(&self, player_id: &str) -> Result<PlayerProfile> {
        let url = format!("{}/stats/v1/player/{}", self.config.base_url(), player_id);
        let wire: ProfileWire = self.fetch_json(&url, &[]).await?;
        Ok(model::flatten_profile(wire))
    }

    /// Career batting figures for one player.
    pub async fn batting_stats(&self, player_id: &str) -> Result<StatsTable> {
        self.career_stats(player_id, "batting").await
    }

    /// Career bowling figures for one player.
    pub async fn bowling_stats(&self, player_id: &str) -> Result<StatsTable> {
        self.career_stats(player_id, "bowling").await
    }

    async fn career_stats(&self, player_id: &str, kind: &str) -> Result<StatsTable> {
        let url = format!(
            "{}/stats/v1/player/{}/{}",
            self.config.base_url(),
            player_id,
            kind
        );
        let wire: StatsWire = self.fetch_json(&url, &[]).await?;
        Ok(model::flatten_stats(wire))
    }

    /// Issue a GET and decode the JSON body.
    ///
    /// Query pairs are URL-encoded by the client. Transport failures,
    /// non-success statuses and undecodable bodies all surface as the
    /// same unavailable error.
    async fn fetch_json<T: DeserializeOwned>(&self, url: &str, query: &[(&str, &str)]) -> Result<T> {
        debug!(%url, "live data request");
        let mut request = self.client.get(url);
        if !query.is_empty() {
            request = request.query(query);
        }
        let response = request.send().await.map_err(LiveError::from)?;

        if !response.status().is_success() {
            return Err(LiveError::unavailable(format!(
                "HTTP {}: {}",
                response.status(),
                response.text().await.unwrap_or_default()
            ))
            .into());
        }

        response
            .json::<T>()
            .await
            .map_err(|e| LiveError::unavailable(format!("unexpected payload: {e}")).into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_builds_from_config() {
        let config = LiveApiConfig::new("a-plausible-key").with_timeout_ms(1_000);
        assert!(LiveClient::new(config).is_ok());
    }

    #[test]
    fn test_client_rejects_key_with_control_characters() {
        let config = LiveApiConfig::new("bad\nkey");
        let err = match LiveClient::new(config) {
            Err(err) => err,
            Ok(_) => panic!("control characters must not form a header value"),
        };
        assert!(err.to_string().contains("Configuration error"));
        // The offending key itself must never appear in the message.
        assert!(!err.to_string().contains("bad\nkey"));
    }
}
