//! Match signals between shopper text and catalog items
//!
//! Text is normalized to lowercase alphanumeric tokens. Phrases match on token
//! boundaries, so "Neural Link" matches "a neural link please" but not
//! "neurallinker".

use super::catalog::CatalogItem;

/// Fixed keyword vocabulary; a keyword matches any token it prefixes
pub const KEYWORDS: &[&str] = &[
    "neural", "quantum", "cyber", "bio", "holo", "nano", "plasma", "fusion", "robot", "space",
    "gravity", "smart",
];

/// Category name suffixes ignored for category mentions
const GENERIC_CATEGORY_SUFFIXES: &[&str] = &["tech", "systems"];

/// Shopping intent triggers and the item terms they imply
pub const INTENT_HEURISTICS: &[(&[&str], &[&str])] = &[
    (
        &["gaming", "game", "games", "gamer"],
        &["vr", "ar", "neural", "holographic"],
    ),
    (
        &["fitness", "health", "workout", "exercise"],
        &["bio", "neural"],
    ),
    (&["home", "house", "apartment"], &["smart", "energy", "robotics"]),
    (
        &["work", "productivity", "office"],
        &["quantum", "neural"],
    ),
    (&["travel", "space", "trip"], &["space", "gravity"]),
];

/// Lowercase alphanumeric tokens of a text
pub fn tokenize(text: &str) -> Vec<String> {
    text.split(|c: char| !c.is_alphanumeric())
        .filter(|token| !token.is_empty())
        .map(|token| token.to_lowercase())
        .collect()
}

/// Whether `needle` occurs as a contiguous token run inside `haystack`
pub fn contains_phrase(haystack: &[String], needle: &[String]) -> bool {
    !needle.is_empty() && haystack.windows(needle.len()).any(|window| window == needle)
}

/// Short terms must match a whole token, longer ones may prefix it
fn term_matches(token: &str, term: &str) -> bool {
    if term.len() <= 2 {
        token == term
    } else {
        token.starts_with(term)
    }
}

fn mentions_term(tokens: &[String], term: &str) -> bool {
    tokens.iter().any(|token| term_matches(token, term))
}

/// Tokens of the shopper and assistant text, kept apart for intent detection
#[derive(Debug, Clone)]
pub struct MatchContext {
    user: Vec<String>,
    combined: Vec<String>,
}

impl MatchContext {
    pub fn new(user_text: &str, ai_text: &str) -> Self {
        let user = tokenize(user_text);
        let mut combined = user.clone();
        // Separator keeps phrases from spanning both texts
        combined.push(String::new());
        combined.extend(tokenize(ai_text));
        Self { user, combined }
    }

    /// Item name mentioned in either text
    pub fn name_match(&self, item: &CatalogItem) -> bool {
        contains_phrase(&self.combined, &tokenize(&item.name))
    }

    /// Category mentioned in either text, generic suffixes stripped
    pub fn category_match(&self, item: &CatalogItem) -> bool {
        contains_phrase(&self.combined, &category_stem(item))
    }

    /// A vocabulary keyword present in both the texts and the item
    pub fn keyword_match(&self, item: &CatalogItem) -> bool {
        let item_tokens = item_tokens(item);
        KEYWORDS.iter().any(|keyword| {
            mentions_term(&self.combined, keyword) && mentions_term(&item_tokens, keyword)
        })
    }

    /// Shopper intent implying the item, e.g. gaming implies VR gear
    pub fn heuristic_match(&self, item: &CatalogItem) -> bool {
        let item_tokens = item_tokens(item);
        INTENT_HEURISTICS.iter().any(|(triggers, terms)| {
            triggers.iter().any(|trigger| self.user.iter().any(|t| t == trigger))
                && terms.iter().any(|term| mentions_term(&item_tokens, term))
        })
    }
}

fn category_stem(item: &CatalogItem) -> Vec<String> {
    let mut stem = tokenize(item.category.name());
    while stem.len() > 1
        && stem
            .last()
            .is_some_and(|last| GENERIC_CATEGORY_SUFFIXES.contains(&last.as_str()))
    {
        stem.pop();
    }
    stem
}

/// Tokens of the item's name, description, category and tags
fn item_tokens(item: &CatalogItem) -> Vec<String> {
    let mut tokens = tokenize(&item.name);
    tokens.extend(tokenize(&item.description));
    tokens.extend(tokenize(item.category.name()));
    for tag in &item.tags {
        tokens.extend(tokenize(tag));
    }
    tokens
}
