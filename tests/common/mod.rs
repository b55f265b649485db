//! Shared test support: a reference implementation of the host capability
//! bundle plus record builders and a first-match evaluator.

use import_style::{
    Collation, ImportKind, ImportRecord, Matcher, NamedMember, NamedMemberSorter, Sorter, Span,
    StyleApi, StyleItem,
};

/// Module names the test host treats as Node built-ins
const NODE_BUILTINS: &[&str] = &[
    "assert",
    "buffer",
    "child_process",
    "cluster",
    "console",
    "crypto",
    "dgram",
    "dns",
    "events",
    "fs",
    "http",
    "http2",
    "https",
    "module",
    "net",
    "os",
    "path",
    "perf_hooks",
    "process",
    "querystring",
    "readline",
    "stream",
    "string_decoder",
    "timers",
    "tls",
    "tty",
    "url",
    "util",
    "v8",
    "vm",
    "worker_threads",
    "zlib",
];

/// Opt-in log output for debugging test runs (RUST_LOG=debug)
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();
}

fn is_relative(module_name: &str) -> bool {
    module_name.starts_with("./") || module_name.starts_with("../")
}

fn is_node_builtin(module_name: &str) -> bool {
    let bare = module_name.strip_prefix("node:").unwrap_or(module_name);
    // Submodule forms like "fs/promises" classify by their root
    let root = bare.split('/').next().unwrap_or(bare);
    NODE_BUILTINS.contains(&root)
}

/// Count of leading `../` parent-directory hops in a relative module path
pub fn leading_parent_segments(module_name: &str) -> usize {
    let mut rest = module_name;
    let mut count = 0;
    while let Some(stripped) = rest.strip_prefix("../") {
        count += 1;
        rest = stripped;
    }
    count
}

/// Reference host for the style capability bundle
///
/// Absolute means package-form: neither relative, scoped, nor built-in, so
/// memberless scoped and built-in imports classify by path shape instead of
/// falling into the bare side-effect groups.
pub struct SorterHost;

impl StyleApi for SorterHost {
    fn and(&self, a: Matcher, b: Matcher) -> Matcher {
        Box::new(move |record| a(record) && b(record))
    }

    fn not(&self, matcher: Matcher) -> Matcher {
        Box::new(move |record| !matcher(record))
    }

    fn has_no_member(&self) -> Matcher {
        Box::new(ImportRecord::has_no_member)
    }

    fn is_absolute_module(&self) -> Matcher {
        Box::new(|record| {
            !is_relative(&record.module_name)
                && !record.module_name.starts_with('@')
                && !is_node_builtin(&record.module_name)
        })
    }

    fn is_relative_module(&self) -> Matcher {
        Box::new(|record| is_relative(&record.module_name))
    }

    fn is_node_module(&self) -> Matcher {
        Box::new(|record| is_node_builtin(&record.module_name))
    }

    fn dot_segment_count(&self) -> Sorter {
        Box::new(|a, b| {
            leading_parent_segments(&a.module_name).cmp(&leading_parent_segments(&b.module_name))
        })
    }

    fn module_name(&self, collation: Collation) -> Sorter {
        Box::new(move |a, b| collation.compare(&a.module_name, &b.module_name))
    }

    fn alias(&self, collation: Collation) -> NamedMemberSorter {
        Box::new(move |a, b| collation.compare(&a.alias, &b.alias))
    }

    fn unicode(&self) -> Collation {
        Collation::Unicode
    }
}

/// A bare side-effect import of `module`
pub fn record(module: &str) -> ImportRecord {
    ImportRecord {
        span: Span::new(0, 0),
        import_span: None,
        kind: ImportKind::Import,
        module_name: module.to_string(),
        default_member: None,
        namespace_member: None,
        named_members: Vec::new(),
    }
}

/// An import of `module` with the given named bindings
pub fn record_with_named(module: &str, members: &[(&str, &str)]) -> ImportRecord {
    let mut result = record(module);
    result.named_members = members
        .iter()
        .map(|(name, alias)| NamedMember::new(*name, *alias))
        .collect();
    result
}

/// An import of `module` with a default binding
pub fn record_with_default(module: &str, default: &str) -> ImportRecord {
    let mut result = record(module);
    result.default_member = Some(default.to_string());
    result
}

/// Table index of the first item matching the record, per host first-match
/// evaluation
pub fn first_match_index(items: &[StyleItem], record: &ImportRecord) -> Option<usize> {
    items.iter().position(|item| item.matches(record))
}

/// 1-based group number in table order (separators excluded)
pub fn matched_group(items: &[StyleItem], record: &ImportRecord) -> Option<usize> {
    first_match_index(items, record).map(|index| index / 2 + 1)
}
