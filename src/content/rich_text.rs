use rand::{Rng, seq::IndexedRandom};
use serde::Deserialize;

use super::model::null_default;

const SAFE_PROTOCOLS: [&str; 4] = ["http", "https", "mailto", "tel"];

/// Portable Text as stored by the CMS: a list of blocks, each a list of
/// decorated spans plus the annotation definitions those spans point at.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(transparent)]
pub struct RichText(#[serde(deserialize_with = "null_default")] pub Vec<Block>);

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Block {
    #[serde(rename = "_type", default)]
    pub kind: String,
    #[serde(default)]
    pub style: Option<String>,
    #[serde(default)]
    pub list_item: Option<String>,
    #[serde(default, deserialize_with = "null_default")]
    pub children: Vec<Span>,
    #[serde(default, deserialize_with = "null_default")]
    pub mark_defs: Vec<MarkDef>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Span {
    #[serde(default, deserialize_with = "null_default")]
    pub text: String,
    #[serde(default, deserialize_with = "null_default")]
    pub marks: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct MarkDef {
    #[serde(rename = "_key")]
    pub key: String,
    #[serde(rename = "_type", default)]
    pub kind: String,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub blank: Option<bool>,
}

/// What a span mark resolves to once annotations are looked up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mark<'a> {
    Strong,
    Emphasis,
    Underline,
    Code,
    StrikeThrough,
    Link { url: &'a str, blank: bool },
    Unknown,
}

impl RichText {
    pub fn blocks(&self) -> &[Block] {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.iter().all(Block::is_empty)
    }

    /// Plain paragraphs, the unit a `random` text command picks from.
    pub fn paragraphs(&self) -> impl Iterator<Item = &Block> {
        self.0.iter().filter(|block| block.is_paragraph())
    }

    pub fn pick_paragraph<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<&Block> {
        let paragraphs: Vec<&Block> = self.paragraphs().collect();
        paragraphs.choose(rng).copied()
    }
}

impl Block {
    pub fn is_paragraph(&self) -> bool {
        self.kind == "block"
            && self.list_item.is_none()
            && self.style.as_deref().is_none_or(|style| style == "normal")
            && !self.is_empty()
    }

    pub fn is_empty(&self) -> bool {
        self.children.iter().all(|span| span.text.trim().is_empty())
    }

    pub fn plain_text(&self) -> String {
        self.children.iter().map(|span| span.text.as_str()).collect()
    }

    pub fn resolve_mark<'a>(&'a self, mark: &str) -> Mark<'a> {
        match mark {
            "strong" => Mark::Strong,
            "em" => Mark::Emphasis,
            "underline" => Mark::Underline,
            "code" => Mark::Code,
            "strike-through" => Mark::StrikeThrough,
            key => match self.mark_defs.iter().find(|def| def.key == key) {
                Some(def) if def.kind == "link" => {
                    let url = def.url.as_deref().unwrap_or_default();
                    if uri_looks_safe(url) {
                        Mark::Link {
                            url,
                            blank: def.blank.unwrap_or(false),
                        }
                    } else {
                        Mark::Unknown
                    }
                }
                _ => Mark::Unknown,
            },
        }
    }
}

/// Relative references and a short list of schemes are allowed, anything
/// else (`javascript:` and friends) renders as plain text.
pub fn uri_looks_safe(uri: &str) -> bool {
    let url = uri.trim();
    if url.starts_with('#') || url.starts_with('/') {
        return true;
    }

    let Some(colon) = url.find(':') else {
        return true;
    };

    let protocol = url[..colon].to_ascii_lowercase();
    if SAFE_PROTOCOLS.contains(&protocol.as_str()) {
        return true;
    }

    // a colon inside the query or fragment is not a scheme separator
    url.find('?').is_some_and(|query| colon > query)
        || url.find('#').is_some_and(|hash| colon > hash)
}
