//! Structural comparison of two JSON values.
//!
//! Traversal runs on an explicit work stack so document depth is never
//! limited by the native call stack. Children are pushed in reverse so
//! differences come out in the same pre-order a recursive walk would give.

use serde_json::{Map, Value};

use super::engine_matching::ArrayMatcher;
use super::result::DiffItem;
use crate::matching::ArrayMatchConfig;
use crate::model::{join_index, join_key, values_equal, RuntimeType};

const UNMATCHED_LEFT_ITEM: &str = "Item from left not found in right (no similar match found)";
const UNMATCHED_RIGHT_ITEM: &str = "New item in right not found in left";

enum Task<'a> {
    Compare {
        left: &'a Value,
        right: &'a Value,
        path: String,
        depth: usize,
    },
    Emit(DiffItem),
}

/// Walks two values and collects their differences in traversal order.
pub(crate) struct Comparator<'e> {
    matcher: ArrayMatcher<'e>,
    config: &'e ArrayMatchConfig,
    order_sensitive: bool,
}

impl<'e> Comparator<'e> {
    pub(crate) fn new(
        matcher: ArrayMatcher<'e>,
        config: &'e ArrayMatchConfig,
        order_sensitive: bool,
    ) -> Self {
        Self {
            matcher,
            config,
            order_sensitive,
        }
    }

    /// Compare `left` against `right` from the root.
    ///
    /// `guard` sees the depth and path of every compared pair before it is
    /// expanded; its first error aborts the traversal.
    pub(crate) fn run<E>(
        &self,
        left: &Value,
        right: &Value,
        mut guard: impl FnMut(usize, &str) -> Result<(), E>,
    ) -> Result<Vec<DiffItem>, E> {
        let mut differences = Vec::new();
        let mut stack = vec![Task::Compare {
            left,
            right,
            path: String::new(),
            depth: 0,
        }];

        while let Some(task) = stack.pop() {
            match task {
                Task::Emit(item) => differences.push(item),
                Task::Compare {
                    left,
                    right,
                    path,
                    depth,
                } => {
                    guard(depth, &path)?;
                    let children = self.expand(left, right, path, depth);
                    stack.extend(children.into_iter().rev());
                }
            }
        }

        Ok(differences)
    }

    /// Tasks produced by one comparison step, in emission order.
    fn expand<'a>(
        &self,
        left: &'a Value,
        right: &'a Value,
        path: String,
        depth: usize,
    ) -> Vec<Task<'a>> {
        if RuntimeType::of(left) != RuntimeType::of(right) {
            return vec![Task::Emit(DiffItem::type_changed(path, left, right))];
        }

        match (left, right) {
            (Value::Array(a), Value::Array(b)) if self.order_sensitive => {
                positional(a, b, &path, depth)
            }
            (Value::Array(a), Value::Array(b)) => self.by_content(a, b, &path, depth),
            (Value::Object(a), Value::Object(b)) => members(a, b, &path, depth),
            // Primitives, and null/array/object mixes (one runtime type)
            _ if values_equal(left, right) => Vec::new(),
            _ => vec![Task::Emit(DiffItem::changed(path, left, right))],
        }
    }

    fn by_content<'a>(
        &self,
        left: &'a [Value],
        right: &'a [Value],
        path: &str,
        depth: usize,
    ) -> Vec<Task<'a>> {
        let alignment = self.matcher.align(left, right);

        let nested = alignment
            .matched
            .iter()
            .filter(|pair| pair.needs_descent(self.config))
            .map(move |pair| Task::Compare {
                left: &left[pair.left],
                right: &right[pair.right],
                path: join_index(path, pair.left),
                depth: depth + 1,
            });
        let missing = alignment.missing.iter().map(move |&i| {
            Task::Emit(DiffItem::missing(
                join_index(path, i),
                &left[i],
                UNMATCHED_LEFT_ITEM,
            ))
        });
        let extra = alignment.extra.iter().map(move |&j| {
            Task::Emit(DiffItem::extra(
                join_index(path, j),
                &right[j],
                UNMATCHED_RIGHT_ITEM,
            ))
        });

        nested.chain(missing).chain(extra).collect()
    }
}

fn positional<'a>(left: &'a [Value], right: &'a [Value], path: &str, depth: usize) -> Vec<Task<'a>> {
    let common = left.len().min(right.len());
    let shared = left.iter().zip(right).enumerate().map(move |(i, (l, r))| Task::Compare {
        left: l,
        right: r,
        path: join_index(path, i),
        depth: depth + 1,
    });
    let missing = left.iter().enumerate().skip(common).map(move |(i, l)| {
        Task::Emit(DiffItem::missing(
            join_index(path, i),
            l,
            format!("Item at index {i} missing in right"),
        ))
    });
    let extra = right.iter().enumerate().skip(common).map(move |(i, r)| {
        Task::Emit(DiffItem::extra(
            join_index(path, i),
            r,
            format!("New item at index {i} in right"),
        ))
    });

    shared.chain(missing).chain(extra).collect()
}

/// Left keys in document order, then right-only keys.
fn members<'a>(
    left: &'a Map<String, Value>,
    right: &'a Map<String, Value>,
    path: &str,
    depth: usize,
) -> Vec<Task<'a>> {
    let shared_or_missing = left.iter().map(move |(key, l)| {
        let member_path = join_key(path, key);
        match right.get(key) {
            Some(r) => Task::Compare {
                left: l,
                right: r,
                path: member_path,
                depth: depth + 1,
            },
            None => Task::Emit(DiffItem::missing(
                member_path,
                l,
                format!("Missing field '{key}' in right"),
            )),
        }
    });
    let extra = right
        .iter()
        .filter(|(key, _)| !left.contains_key(*key))
        .map(move |(key, r)| {
            Task::Emit(DiffItem::extra(
                join_key(path, key),
                r,
                format!("Extra field '{key}' in right"),
            ))
        });

    shared_or_missing.chain(extra).collect()
}
