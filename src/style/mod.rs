//! Style capability contract and rule table entities
//!
//! An import sorter host exposes a small bundle of predicate combinators and
//! sorter builders (the "style API"). A style module consumes that bundle and
//! assembles an ordered table of grouping rules; the host then evaluates each
//! parsed import against the table to decide its group and position.
//!
//! This module defines the consumed contract ([`StyleApi`]) and the produced
//! entities ([`StyleItem`] and the boxed matcher/sorter function types). The
//! table itself is built in [`grouping`].

pub mod grouping;

pub use grouping::grouping_rules;

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::StyleError;
use crate::import::{ImportRecord, NamedMember};

/// Predicate deciding whether an import belongs to a rule's group
pub type Matcher = Box<dyn Fn(&ImportRecord) -> bool + Send + Sync>;

/// Comparator over imports within one group
///
/// Composite orders are expressed as a sequence of sorters applied
/// left-to-right, each breaking ties of the previous.
pub type Sorter = Box<dyn Fn(&ImportRecord, &ImportRecord) -> Ordering + Send + Sync>;

/// Comparator over the named-member bindings of a single import
pub type NamedMemberSorter = Box<dyn Fn(&NamedMember, &NamedMember) -> Ordering + Send + Sync>;

/// Token selecting the string comparison used for ordering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Collation {
    /// Unicode code point order
    Unicode,
}

impl Collation {
    pub fn compare(&self, a: &str, b: &str) -> Ordering {
        match self {
            Self::Unicode => a.cmp(b),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Unicode => "unicode",
        }
    }
}

impl fmt::Display for Collation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Collation {
    type Err = StyleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "unicode" => Ok(Self::Unicode),
            _ => Err(StyleError::UnknownCollation {
                value: s.to_string(),
            }),
        }
    }
}

/// One entry of the rule table: a matched group or a separator
///
/// Groups carry an optional intra-group sort and an optional named-member
/// sort. Separators carry neither and signal a blank line between adjacent
/// groups in rendered output.
pub struct StyleItem {
    pub matcher: Option<Matcher>,
    pub sort: Vec<Sorter>,
    pub sort_named_members: Option<NamedMemberSorter>,
    pub separator: bool,
}

impl StyleItem {
    /// A group with no intra-group ordering (bare side-effect imports)
    pub fn group(matcher: Matcher) -> Self {
        Self {
            matcher: Some(matcher),
            sort: Vec::new(),
            sort_named_members: None,
            separator: false,
        }
    }

    /// A group ordered by the given sorters, with named members ordered too
    pub fn sorted_group(
        matcher: Matcher,
        sort: Vec<Sorter>,
        sort_named_members: NamedMemberSorter,
    ) -> Self {
        Self {
            matcher: Some(matcher),
            sort,
            sort_named_members: Some(sort_named_members),
            separator: false,
        }
    }

    /// A blank-line boundary between groups
    pub fn separator() -> Self {
        Self {
            matcher: None,
            sort: Vec::new(),
            sort_named_members: None,
            separator: true,
        }
    }

    pub fn is_separator(&self) -> bool {
        self.separator
    }

    /// Whether this item's group accepts the record; separators accept nothing
    pub fn matches(&self, record: &ImportRecord) -> bool {
        match &self.matcher {
            Some(matcher) => matcher(record),
            None => false,
        }
    }

    /// Compare two imports under this group's sort, left-to-right
    ///
    /// Groups without a sort leave source order untouched (always `Equal`).
    pub fn compare(&self, a: &ImportRecord, b: &ImportRecord) -> Ordering {
        for sorter in &self.sort {
            match sorter(a, b) {
                Ordering::Equal => continue,
                decided => return decided,
            }
        }
        Ordering::Equal
    }

    /// Compare two named-member bindings under this group's member sort
    pub fn compare_named_members(&self, a: &NamedMember, b: &NamedMember) -> Ordering {
        match &self.sort_named_members {
            Some(sorter) => sorter(a, b),
            None => Ordering::Equal,
        }
    }
}

impl fmt::Debug for StyleItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StyleItem")
            .field("matcher", &self.matcher.as_ref().map(|_| "<fn>"))
            .field("sort", &self.sort.len())
            .field(
                "sort_named_members",
                &self.sort_named_members.as_ref().map(|_| "<fn>"),
            )
            .field("separator", &self.separator)
            .finish()
    }
}

/// The capability bundle a sorter host supplies to a style module
///
/// All capabilities are pure: matchers read only the record, sorters define
/// total orders, and repeated calls return equivalent functions. Panics
/// raised by a capability propagate unmodified to the host.
pub trait StyleApi {
    /// Both predicates hold
    fn and(&self, a: Matcher, b: Matcher) -> Matcher;

    /// Predicate does not hold
    fn not(&self, matcher: Matcher) -> Matcher;

    /// No default, namespace, or named bindings
    fn has_no_member(&self) -> Matcher;

    /// Package-form module path: neither relative, scoped, nor built-in
    fn is_absolute_module(&self) -> Matcher;

    /// Module path starting with `./` or `../`
    fn is_relative_module(&self) -> Matcher;

    /// Recognized built-in/platform module name (e.g. `fs`, `node:path`)
    fn is_node_module(&self) -> Matcher;

    /// Orders relative imports by ascending count of leading `../` segments
    fn dot_segment_count(&self) -> Sorter;

    /// Orders imports by module name under the given collation
    fn module_name(&self, collation: Collation) -> Sorter;

    /// Orders named-member bindings by alias under the given collation
    fn alias(&self, collation: Collation) -> NamedMemberSorter;

    /// The host's Unicode collation token
    fn unicode(&self) -> Collation;
}
