// URL fragment codec
//
// Maps `NavigationState` to a `key=value&...` fragment and back. Both
// directions are total: anything unreadable falls back to its default.
use crate::registry::SectionRegistry;
use crate::state::{CurrentSection, NavigationState, SearchKeyword, SortOrder};
use percent_encoding::{percent_decode_str, utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use std::collections::BTreeSet;

pub const SECTION_PARAM: &str = "section";
pub const SORT_PARAM: &str = "sort";
pub const KEYWORD_PARAM: &str = "keyword";

/// Old bare-token fragments that now live under another name.
const LEGACY_ALIASES: &[(&str, &str)] = &[("all", "accelerators")];

/// Same reserved set as JavaScript's `encodeURIComponent`.
const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// A filter category and the fragment parameter that carries it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FilterParam {
    pub category: String,
    pub param: String,
}

impl FilterParam {
    pub fn new(category: &str, param: &str) -> Self {
        Self {
            category: category.to_string(),
            param: param.to_string(),
        }
    }
}

#[derive(Clone, Debug)]
pub struct FragmentCodec {
    registry: SectionRegistry,
    filters: Vec<FilterParam>,
    known_categories: Option<BTreeSet<String>>,
}

impl FragmentCodec {
    pub fn new(registry: SectionRegistry, filters: Vec<FilterParam>) -> Self {
        Self {
            registry,
            filters,
            known_categories: None,
        }
    }

    /// Restricts decoded filter categories to those the catalog actually has.
    pub fn with_known_categories<I, S>(mut self, categories: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.known_categories = Some(categories.into_iter().map(Into::into).collect());
        self
    }

    pub fn registry(&self) -> &SectionRegistry {
        &self.registry
    }

    pub fn filter_params(&self) -> &[FilterParam] {
        &self.filters
    }

    /// True if filters of this category survive a decode.
    pub fn accepts_category(&self, category: &str) -> bool {
        self.filters.iter().any(|f| f.category == category)
            && self
                .known_categories
                .as_ref()
                .is_none_or(|known| known.contains(category))
    }

    /// Canonical fragment without the leading `#`. Defaults are omitted, so
    /// the default state encodes to an empty string.
    pub fn encode(&self, state: &NavigationState) -> String {
        let mut params = Vec::new();

        if let Some(section) = state.current_section.section() {
            params.push(format!("{SECTION_PARAM}={}", encode_component(section.as_str())));
        }
        if state.sort_order != SortOrder::default() {
            params.push(format!("{SORT_PARAM}={}", state.sort_order.url_token()));
        }
        if !state.search_keyword.is_empty() {
            params.push(format!(
                "{KEYWORD_PARAM}={}",
                encode_component(state.search_keyword.as_str())
            ));
        }
        for filter in &self.filters {
            let Some(values) = state.filter_selections.values(&filter.category) else {
                continue;
            };
            let joined = values
                .iter()
                .map(|v| encode_component(v))
                .collect::<Vec<_>>()
                .join(",");
            params.push(format!("{}={joined}", filter.param));
        }

        params.join("&")
    }

    pub fn decode(&self, fragment: &str) -> NavigationState {
        let fragment = strip_hash(fragment);
        let mut state = NavigationState::default();
        if fragment.is_empty() {
            return state;
        }

        if !fragment.contains('=') {
            let token = resolve_legacy(fragment);
            state.current_section = self.decode_section(token);
            return state;
        }

        let params = parse_params(fragment);

        if let Some(raw) = lookup(&params, SECTION_PARAM) {
            state.current_section = self.decode_section(raw);
        }

        if let Some(raw) = lookup(&params, SORT_PARAM) {
            state.sort_order = SortOrder::from_url_token(raw).unwrap_or_else(|| {
                log::debug!("Unknown sort token '{raw}', using default");
                SortOrder::default()
            });
        }

        if let Some(raw) = lookup(&params, KEYWORD_PARAM) {
            let keyword = decode_component(raw).unwrap_or_else(|| {
                log::debug!("Malformed keyword parameter '{raw}', clearing search");
                String::new()
            });
            state.search_keyword = SearchKeyword::new(keyword);
        }

        for filter in &self.filters {
            let Some(raw) = lookup(&params, &filter.param) else {
                continue;
            };
            let values = raw.split(',').filter_map(|entry| {
                let decoded = decode_component(entry);
                if decoded.is_none() {
                    log::debug!("Dropping malformed filter value '{entry}'");
                }
                decoded
            });
            state.filter_selections.set_category(&filter.category, values);
        }
        state.filter_selections.retain_categories(|category| {
            let keep = self.accepts_category(category);
            if !keep {
                log::debug!("Dropping filter category '{category}' not in catalog");
            }
            keep
        });

        state
    }

    /// If the fragment used a legacy alias, the fragment the address bar
    /// should be rewritten to.
    pub fn legacy_rewrite(&self, fragment: &str) -> Option<String> {
        let fragment = strip_hash(fragment);
        if fragment.contains('=') {
            return None;
        }
        LEGACY_ALIASES
            .iter()
            .find(|(alias, _)| *alias == fragment)
            .map(|(_, target)| (*target).to_string())
    }

    fn decode_section(&self, raw: &str) -> CurrentSection {
        let Some(decoded) = decode_component(raw) else {
            log::debug!("Malformed section parameter '{raw}'");
            return CurrentSection::Home;
        };
        let id = decoded.trim();
        if id.is_empty() {
            return CurrentSection::Home;
        }
        match self.registry.lookup(id) {
            Some(section) => CurrentSection::Active(section.clone()),
            None => {
                log::debug!("Unregistered section '{id}' in fragment");
                CurrentSection::Home
            }
        }
    }
}

fn strip_hash(fragment: &str) -> &str {
    fragment.strip_prefix('#').unwrap_or(fragment)
}

fn resolve_legacy(token: &str) -> &str {
    LEGACY_ALIASES
        .iter()
        .find(|(alias, _)| *alias == token)
        .map_or(token, |(_, target)| *target)
}

fn parse_params(fragment: &str) -> Vec<(&str, &str)> {
    fragment
        .split('&')
        .filter(|pair| !pair.is_empty())
        .map(|pair| pair.split_once('=').unwrap_or((pair, "")))
        .collect()
}

// First occurrence wins.
fn lookup<'a>(params: &[(&str, &'a str)], key: &str) -> Option<&'a str> {
    params.iter().find(|(k, _)| *k == key).map(|(_, v)| *v)
}

pub fn encode_component(value: &str) -> String {
    utf8_percent_encode(value, COMPONENT).to_string()
}

/// Percent-decodes one component. `None` on a dangling `%` escape or
/// invalid UTF-8. `+` reads as a space.
pub fn decode_component(raw: &str) -> Option<String> {
    let bytes = raw.as_bytes();
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'%' {
            let valid = bytes.get(i + 1).is_some_and(u8::is_ascii_hexdigit)
                && bytes.get(i + 2).is_some_and(u8::is_ascii_hexdigit);
            if !valid {
                return None;
            }
            i += 3;
        } else {
            i += 1;
        }
    }

    let spaced = raw.replace('+', " ");
    percent_decode_str(&spaced)
        .decode_utf8()
        .ok()
        .map(|decoded| decoded.into_owned())
}
