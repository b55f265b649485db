//! Grouping and ordering rules for JavaScript/TypeScript import sorting
//!
//! A declarative style module for an import-statement sorter. Given the
//! capability bundle a sorter host supplies ([`StyleApi`]), [`grouping_rules`]
//! returns a fixed ordered table of match/sort/separator directives: bare
//! side-effect imports first, then built-in modules, unscoped packages, the
//! scoped alias groups (`@hook`, `@components`, `@contexts`, `@utils`,
//! `@config`), remaining scoped packages, and relative imports last, ordered
//! by how many `../` hops they climb.
//!
//! Parsing, file rewriting, and rule evaluation are the host's job; this
//! crate is a pure rule-table construction with no I/O and no runtime state.

pub mod error;
pub mod import;
pub mod style;

// Explicit exports for better API clarity
pub use error::{StyleError, StyleResult};
pub use import::{ImportKind, ImportRecord, NamedMember, Span};
pub use style::{
    Collation, Matcher, NamedMemberSorter, Sorter, StyleApi, StyleItem, grouping_rules,
};
