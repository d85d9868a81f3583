use async_trait::async_trait;
use reqwest::Url;
use serde::{Deserialize, de::DeserializeOwned};
use serde_json::{Value, json};
use tracing::debug;

use crate::config::SanityConfig;

use super::{
    ContentBackend,
    error::ContentError,
    model::{Documents, Lenient, Release, Show},
};

const LINK_FRAGMENT: &str = "text, url, blank";

const LATEST_UPDATE: &str =
    "*[!(_type match 'system.*')] | order(_updatedAt desc)[0]._updatedAt";

const LATEST_UPDATE_SINCE: &str = "*[!(_type match 'system.*') && _updatedAt > $lastModified] | order(_updatedAt desc)[0]._updatedAt";

const SHOWS: &str = "*[_type == 'show' && startDate > now()] | order(startDate asc) { title, startDate, city, country, link }";

const MUSIC: &str =
    "*[_type == 'release'] | order(releaseDate desc) { name, label, releaseDate, link }";

const CONTACT: &str = "*[_id == 'team'][0] { 'team': members[] { firstName, lastName, companyName, companyUrl, role, email } }";

const TEXT_COMMANDS: &str =
    "*[_id == 'textCommands'][0] { commands[] { title, command, hidden, type, result } }";

const AUDIO_COMMANDS: &str = "*[_id == 'audioCommands'][0] { commands[] { title, command, hidden, 'url': file.asset->url } }";

#[derive(Deserialize)]
struct QueryResponse {
    result: Value,
}

/// Read-only client for the Sanity query API.
pub struct SanityClient {
    http: reqwest::Client,
    endpoint: Url,
}

impl SanityClient {
    pub fn new(config: &SanityConfig) -> Result<Self, ContentError> {
        let host = if config.use_cdn { "apicdn" } else { "api" };
        let endpoint = format!(
            "https://{}.{host}.sanity.io/v{}/data/query/{}",
            config.project_id, config.api_version, config.dataset
        );
        let endpoint = Url::parse(&endpoint).map_err(|e| ContentError::Endpoint(e.to_string()))?;

        Ok(Self {
            http: reqwest::Client::new(),
            endpoint,
        })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// Runs a GROQ query against the published perspective. Parameters are
    /// JSON encoded, as the API expects.
    pub async fn query<T: DeserializeOwned>(
        &self,
        document: &'static str,
        groq: &str,
        params: &[(&str, Value)],
    ) -> Result<T, ContentError> {
        let mut url = self.endpoint.clone();
        {
            let mut pairs = url.query_pairs_mut();
            pairs.append_pair("query", groq);
            for (name, value) in params {
                pairs.append_pair(&format!("${name}"), &value.to_string());
            }
            pairs.append_pair("perspective", "published");
        }

        debug!(document, "sanity_query");
        let response: QueryResponse = self
            .http
            .get(url)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        serde_json::from_value(response.result)
            .map_err(|source| ContentError::Decode { document, source })
    }

    fn about_query() -> String {
        format!("*[_id == 'about'][0] {{ bio, socials[] {{ {LINK_FRAGMENT} }} }}")
    }
}

#[async_trait]
impl ContentBackend for SanityClient {
    async fn latest_update(&self, since: Option<&str>) -> Result<Option<String>, ContentError> {
        match since {
            Some(stamp) => {
                self.query("latest_update", LATEST_UPDATE_SINCE, &[("lastModified", json!(stamp))])
                    .await
            }
            None => self.query("latest_update", LATEST_UPDATE, &[]).await,
        }
    }

    async fn fetch_documents(&self) -> Result<Documents, ContentError> {
        let about_query = Self::about_query();
        let (about, shows, music, contact, text_commands, audio_commands) = tokio::try_join!(
            self.query("about", &about_query, &[]),
            self.query::<Option<Lenient<Show>>>("shows", SHOWS, &[]),
            self.query::<Option<Lenient<Release>>>("music", MUSIC, &[]),
            self.query("contact", CONTACT, &[]),
            self.query("text_commands", TEXT_COMMANDS, &[]),
            self.query("audio_commands", AUDIO_COMMANDS, &[]),
        )?;

        Ok(Documents {
            about,
            shows: shows.map(Lenient::into_inner),
            music: music.map(Lenient::into_inner),
            contact,
            text_commands,
            audio_commands,
        })
    }
}
