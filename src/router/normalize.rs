/// The one command the router understands without a catalog.
pub const BACK_COMMAND: &str = "back";

/// Turns typed text into the token used for alias lookup.
///
/// Case, whitespace and punctuation are dropped, so `Tell My Future`,
/// `tellMyFuture` and `TELL-MY-FUTURE` all become `tellmyfuture`. Input with
/// nothing alphanumeric in it becomes the empty token, which matches nothing.
pub fn normalize(raw: &str) -> String {
    raw.chars()
        .filter(|c| c.is_alphanumeric())
        .flat_map(char::to_lowercase)
        .collect()
}

/// Display form of an authored alias: lower case, single spaced.
pub fn alias(raw: &str) -> String {
    raw.split_whitespace()
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join(" ")
}

/// URL slug for CMS-authored commands, `Tell My Future!` -> `tell-my-future`.
pub fn slug(title: &str) -> String {
    title
        .split(|c: char| !c.is_alphanumeric())
        .filter(|word| !word.is_empty())
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join("-")
}
