// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::Attr;
use serde_json::{Map, Value};

/// Attributes and groups bound to a [`crate::Handler`] with
/// [`crate::Handler::with_attrs`] and [`crate::Handler::with_group`].
///
/// Attributes are added to the innermost open group (or the root if no group is open).
/// The attributes of a record land in the innermost open group too. When the scope is
/// turned into a JSON object, groups that ended up with no attributes are omitted.
///
/// ```text
/// with_attrs(a=1) -> with_group("req") -> with_attrs(id=7) -> record attrs(ms=3)
///
/// { "a": 1, "req": { "id": 7, "ms": 3 } }
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AttrScope {
    root: Vec<Attr>,
    groups: Vec<GroupFrame>,
}

#[derive(Debug, Clone, PartialEq)]
struct GroupFrame {
    name: String,
    attrs: Vec<Attr>,
}

impl AttrScope {
    pub fn add_attrs(&mut self, attrs: impl IntoIterator<Item = Attr>) {
        let target = match self.groups.last_mut() {
            Some(frame) => &mut frame.attrs,
            None => &mut self.root,
        };
        target.extend(attrs);
    }

    /// Opens a nested group. An empty name is ignored.
    pub fn open_group(&mut self, name: impl Into<String>) {
        let name = name.into();
        if name.is_empty() {
            return;
        }
        self.groups.push(GroupFrame {
            name,
            attrs: vec![],
        });
    }

    /// `true` if no attribute is bound at any level. Open groups alone don't count.
    #[must_use]
    pub fn has_no_attrs(&self) -> bool {
        self.root.is_empty() && self.groups.iter().all(|it| it.attrs.is_empty())
    }

    /// Merge the bound attributes with `record_attrs` into one JSON object.
    #[must_use]
    pub fn to_json_object(&self, record_attrs: &[Attr]) -> Map<String, Value> {
        let mut carry = attrs_to_map(record_attrs);

        for frame in self.groups.iter().rev() {
            let mut map = attrs_to_map(&frame.attrs);
            map.extend(carry);
            carry = Map::new();
            if !map.is_empty() {
                carry.insert(frame.name.clone(), Value::Object(map));
            }
        }

        let mut root = attrs_to_map(&self.root);
        root.extend(carry);
        root
    }
}

fn attrs_to_map(attrs: &[Attr]) -> Map<String, Value> {
    attrs
        .iter()
        .map(|attr| (attr.key.clone(), attr.value.clone()))
        .collect()
}
