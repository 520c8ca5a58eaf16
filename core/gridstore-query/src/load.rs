//! The grid's load request and its translation into query parameters.

use crate::filter::FilterNode;
use crate::params::QueryParams;
use serde::{Deserialize, Serialize};

/// One sort criterion.
///
/// Deserializes from either `{"selector": "name", "desc": true}` or a bare
/// selector string, which sorts ascending.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RawSortSpec")]
pub struct SortSpec {
    pub selector: String,
    pub desc: bool,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawSortSpec {
    Selector(String),
    Full {
        selector: String,
        #[serde(default)]
        desc: bool,
    },
}

impl From<RawSortSpec> for SortSpec {
    fn from(raw: RawSortSpec) -> Self {
        match raw {
            RawSortSpec::Selector(selector) => Self { selector, desc: false },
            RawSortSpec::Full { selector, desc } => Self { selector, desc },
        }
    }
}

impl SortSpec {
    pub fn asc(selector: impl Into<String>) -> Self {
        Self {
            selector: selector.into(),
            desc: false,
        }
    }

    pub fn desc(selector: impl Into<String>) -> Self {
        Self {
            selector: selector.into(),
            desc: true,
        }
    }

    /// `field` or `-field`, as used in the `ordering` parameter.
    pub fn ordering_term(&self) -> String {
        if self.desc {
            format!("-{}", self.selector)
        } else {
            self.selector.clone()
        }
    }

    /// Parses an `ordering` value such as `name,-age` back into sort specs.
    pub fn parse_ordering(ordering: &str) -> Vec<Self> {
        ordering
            .split(',')
            .map(str::trim)
            .filter(|term| !term.is_empty())
            .map(|term| match term.strip_prefix('-') {
                Some(selector) => Self::desc(selector),
                None => Self::asc(term),
            })
            .collect()
    }
}

/// A request for one page of records.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoadOptions {
    /// Page size.
    pub take: Option<u64>,
    /// Offset of the first record. Only sent together with `take`.
    pub skip: Option<u64>,
    /// Free-text search.
    pub search_value: Option<String>,
    pub sort: Option<Vec<SortSpec>>,
    pub filter: Option<FilterNode>,
}

impl LoadOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_page(mut self, take: u64, skip: u64) -> Self {
        self.take = Some(take);
        self.skip = Some(skip);
        self
    }

    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search_value = Some(search.into());
        self
    }

    pub fn with_sort(mut self, sort: Vec<SortSpec>) -> Self {
        self.sort = Some(sort);
        self
    }

    pub fn with_filter(mut self, filter: FilterNode) -> Self {
        self.filter = Some(filter);
        self
    }

    /// Builds the list endpoint's query parameters.
    ///
    /// Parameters are set in this order: `limit`/`offset`, `_search`,
    /// `ordering`, then one parameter per filter leaf.
    pub fn to_query_params(&self) -> QueryParams {
        let mut params = QueryParams::new();

        if let Some(take) = self.take {
            params.set("limit", take.to_string());
            params.set("offset", self.skip.unwrap_or(0).to_string());
        }

        if let Some(search) = &self.search_value {
            params.set("_search", search.as_str());
        }

        if let Some(sort) = self.sort.as_ref().filter(|sort| !sort.is_empty()) {
            let ordering = sort
                .iter()
                .map(SortSpec::ordering_term)
                .collect::<Vec<_>>()
                .join(",");
            params.set("ordering", ordering);
        }

        if let Some(filter) = &self.filter {
            filter.apply_to(&mut params);
        }

        params
    }
}
