//! The import grouping rule table
//!
//! Eleven groups in a fixed order, each followed by a separator: bare
//! side-effect imports (package then local), built-in modules, unscoped
//! packages, the five scoped alias groups (`@hook`, `@components`,
//! `@contexts`, `@utils`, `@config`), remaining scoped packages, and finally
//! relative imports ordered by how far they climb out of the current
//! directory.
//!
//! The host evaluates records against the table in sequence order; the
//! catch-all scoped group therefore sits after the five alias groups, which
//! would otherwise be swallowed by it. The trailing separator after the last
//! group matches what hosts receive today; collapsing it is left to the host.

use tracing::debug;

use super::{StyleApi, StyleItem};
use crate::import::ImportRecord;

fn is_scoped(record: &ImportRecord) -> bool {
    record.module_name.starts_with('@')
}

fn is_hook(record: &ImportRecord) -> bool {
    record.module_name.starts_with("@hook")
}

fn is_component(record: &ImportRecord) -> bool {
    record.module_name.starts_with("@components")
}

fn is_context(record: &ImportRecord) -> bool {
    record.module_name.starts_with("@contexts")
}

fn is_utils(record: &ImportRecord) -> bool {
    record.module_name.starts_with("@utils")
}

fn is_config(record: &ImportRecord) -> bool {
    record.module_name.starts_with("@config")
}

/// Build the ordered rule table from a host capability bundle
///
/// Deterministic and side-effect free: the output depends only on the
/// supplied bundle. Prefix classification is a case-sensitive match against
/// the raw module name; records are never validated or mutated here.
pub fn grouping_rules(api: &dyn StyleApi) -> Vec<StyleItem> {
    let unicode = api.unicode();

    let items = vec![
        // import "foo"
        StyleItem::group(api.and(api.has_no_member(), api.is_absolute_module())),
        StyleItem::separator(),
        // import "./foo"
        StyleItem::group(api.and(api.has_no_member(), api.is_relative_module())),
        StyleItem::separator(),
        // import ... from "fs"
        StyleItem::sorted_group(
            api.is_node_module(),
            vec![api.module_name(unicode)],
            api.alias(unicode),
        ),
        StyleItem::separator(),
        // import ... from "foo"
        StyleItem::sorted_group(
            api.and(api.is_absolute_module(), api.not(Box::new(is_scoped))),
            vec![api.module_name(unicode)],
            api.alias(unicode),
        ),
        StyleItem::separator(),
        // import ... from "@hook/..."
        StyleItem::sorted_group(
            Box::new(is_hook),
            vec![api.module_name(unicode)],
            api.alias(unicode),
        ),
        StyleItem::separator(),
        // import ... from "@components/..."
        StyleItem::sorted_group(
            Box::new(is_component),
            vec![api.module_name(unicode)],
            api.alias(unicode),
        ),
        StyleItem::separator(),
        // import ... from "@contexts/..."
        StyleItem::sorted_group(
            Box::new(is_context),
            vec![api.module_name(unicode)],
            api.alias(unicode),
        ),
        StyleItem::separator(),
        // import ... from "@utils/..."
        StyleItem::sorted_group(
            Box::new(is_utils),
            vec![api.module_name(unicode)],
            api.alias(unicode),
        ),
        StyleItem::separator(),
        // import ... from "@config/..."
        StyleItem::sorted_group(
            Box::new(is_config),
            vec![api.module_name(unicode)],
            api.alias(unicode),
        ),
        StyleItem::separator(),
        // import ... from "@foo/..."
        StyleItem::sorted_group(
            Box::new(is_scoped),
            vec![api.module_name(unicode)],
            api.alias(unicode),
        ),
        StyleItem::separator(),
        // import ... from "./foo", "../foo"
        StyleItem::sorted_group(
            api.is_relative_module(),
            vec![api.dot_segment_count(), api.module_name(unicode)],
            api.alias(unicode),
        ),
        StyleItem::separator(),
    ];

    debug!(rules = items.len(), "built import grouping rule table");
    items
}
