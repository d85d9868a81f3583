use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, de::DeserializeOwned};
use serde_json::Value;
use tracing::warn;

use super::rich_text::RichText;

/// Sanity projections return `null` for absent fields and empty arrays alike.
pub(crate) fn null_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Decodes every element on its own so one malformed record only costs
/// itself.
pub(crate) fn decode_items<T: DeserializeOwned>(items: Vec<Value>) -> Vec<T> {
    items
        .into_iter()
        .filter_map(|item| match serde_json::from_value(item) {
            Ok(value) => Some(value),
            Err(e) => {
                warn!(error = %e, "content_item_skipped");
                None
            }
        })
        .collect()
}

pub(crate) fn lenient_list<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let items: Vec<Value> = null_default(deserializer)?;
    Ok(decode_items(items))
}

/// A list document decoded item by item, see [`decode_items`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Lenient<T>(pub Vec<T>);

impl<T> Lenient<T> {
    pub fn into_inner(self) -> Vec<T> {
        self.0
    }
}

impl<'de, T: DeserializeOwned> Deserialize<'de> for Lenient<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        lenient_list(deserializer).map(Lenient)
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LinkData {
    #[serde(default, deserialize_with = "null_default")]
    pub text: String,
    #[serde(default, deserialize_with = "null_default")]
    pub url: String,
    #[serde(default)]
    pub blank: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct About {
    #[serde(default)]
    pub bio: RichText,
    #[serde(default, deserialize_with = "lenient_list")]
    pub socials: Vec<LinkData>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Show {
    #[serde(default, deserialize_with = "null_default")]
    pub title: String,
    pub start_date: NaiveDate,
    #[serde(default, deserialize_with = "null_default")]
    pub city: String,
    #[serde(default, deserialize_with = "null_default")]
    pub country: String,
    #[serde(default)]
    pub link: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Release {
    #[serde(default, deserialize_with = "null_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_default")]
    pub label: String,
    pub release_date: NaiveDate,
    #[serde(default)]
    pub link: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamMember {
    #[serde(default, deserialize_with = "null_default")]
    pub first_name: String,
    #[serde(default, deserialize_with = "null_default")]
    pub last_name: String,
    #[serde(default, deserialize_with = "null_default")]
    pub role: String,
    #[serde(default)]
    pub company_name: Option<String>,
    #[serde(default)]
    pub company_url: Option<String>,
    #[serde(default, deserialize_with = "null_default")]
    pub email: String,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Contact {
    #[serde(default, deserialize_with = "lenient_list")]
    pub team: Vec<TeamMember>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResultKind {
    #[default]
    Single,
    Random,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TextCommand {
    pub kind: ResultKind,
    pub result: RichText,
}

/// Opaque reference to an audio asset, either a URL or a path relative to
/// the assets directory. Never validated here.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AssetRef(String);

impl AssetRef {
    pub fn new(reference: impl Into<String>) -> Self {
        Self(reference.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_remote(&self) -> bool {
        self.0.starts_with("http://") || self.0.starts_with("https://")
    }
}

impl fmt::Display for AssetRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for AssetRef {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Template {
    About,
    Shows,
    Music,
    Contact,
}

impl Template {
    pub const ALL: [Template; 4] = [
        Template::About,
        Template::Shows,
        Template::Music,
        Template::Contact,
    ];

    pub fn target(self) -> &'static str {
        match self {
            Template::About => "about",
            Template::Shows => "shows",
            Template::Music => "music",
            Template::Contact => "contact",
        }
    }

    /// Built-in aliases, primary first.
    pub fn commands(self) -> &'static [&'static str] {
        match self {
            Template::About => &["about"],
            Template::Shows => &["shows", "tour"],
            Template::Music => &["music", "releases"],
            Template::Contact => &["contact"],
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScreenKind {
    Template(Template),
    TextCommand,
    AudioCommand,
}

/// Kind-specific payload. The router only ever asks whether a screen is
/// navigable or carries an asset to trigger.
#[derive(Debug, Clone, PartialEq)]
pub enum ScreenContent {
    About(About),
    Shows(Vec<Show>),
    Music(Vec<Release>),
    Contact(Contact),
    Text(TextCommand),
    Audio(AssetRef),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Screen {
    pub target: String,
    pub commands: Vec<String>,
    pub hidden: bool,
    pub content: ScreenContent,
}

impl Screen {
    pub fn kind(&self) -> ScreenKind {
        match &self.content {
            ScreenContent::About(_) => ScreenKind::Template(Template::About),
            ScreenContent::Shows(_) => ScreenKind::Template(Template::Shows),
            ScreenContent::Music(_) => ScreenKind::Template(Template::Music),
            ScreenContent::Contact(_) => ScreenKind::Template(Template::Contact),
            ScreenContent::Text(_) => ScreenKind::TextCommand,
            ScreenContent::Audio(_) => ScreenKind::AudioCommand,
        }
    }

    /// Audio commands trigger playback and never become the current screen.
    pub fn is_navigable(&self) -> bool {
        self.kind() != ScreenKind::AudioCommand
    }

    pub fn asset(&self) -> Option<&AssetRef> {
        match &self.content {
            ScreenContent::Audio(asset) => Some(asset),
            _ => None,
        }
    }

    pub fn primary_command(&self) -> Option<&str> {
        self.commands.first().map(String::as_str)
    }

    pub fn path(&self) -> String {
        format!("/{}", self.target)
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TextCommandEntry {
    #[serde(default, deserialize_with = "null_default")]
    pub title: String,
    #[serde(default, deserialize_with = "null_default")]
    pub command: String,
    #[serde(default)]
    pub hidden: Option<bool>,
    #[serde(rename = "type", default)]
    pub kind: ResultKind,
    #[serde(default)]
    pub result: RichText,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AudioCommandEntry {
    #[serde(default, deserialize_with = "null_default")]
    pub title: String,
    #[serde(default, deserialize_with = "null_default")]
    pub command: String,
    #[serde(default)]
    pub hidden: Option<bool>,
    #[serde(default)]
    pub url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(bound(deserialize = "T: DeserializeOwned"))]
pub struct CommandList<T> {
    #[serde(default = "Vec::new", deserialize_with = "lenient_list")]
    pub commands: Vec<T>,
}

/// One point-in-time fetch of every document the site is built from.
/// `None` means the document does not exist in the dataset.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Documents {
    pub about: Option<About>,
    pub shows: Option<Vec<Show>>,
    pub music: Option<Vec<Release>>,
    pub contact: Option<Contact>,
    pub text_commands: Option<CommandList<TextCommandEntry>>,
    pub audio_commands: Option<CommandList<AudioCommandEntry>>,
}
