//! Field-oriented operations on collections of dynamic records.
//!
//! Paths use dot notation (`"user.address.city"`), with numeric segments
//! indexing into arrays. A path that does not resolve reads as `null`.

use collectable_internals::{
    Kind,
    merge::{merge_lists, replace_values},
    path,
    shape::{keys_overlap, matches_shape},
};
use serde_json::Value;

use super::grouping::first_of_repeated;
use crate::{
    Collection, Map,
    compare::{LooseEq, Ordinal},
    convert::ToKey,
};

static NULL: Value = Value::Null;

/// The value at `path`, or `null` when the path does not resolve.
fn field<'a>(item: &'a Value, path: &str) -> &'a Value {
    path::get(item, path).unwrap_or(&NULL)
}

/// Maps every object element through `f`, leaving other elements as they
/// are.
fn map_objects<F>(items: &Collection<Value>, mut f: F) -> Collection<Value>
where
    F: FnMut(&serde_json::Map<String, Value>) -> serde_json::Map<String, Value>,
{
    items.map(|item| match item {
        Value::Object(object) => Value::Object(f(object)),
        other => other.clone(),
    })
}

fn flatten_into(items: &[Value], depth: usize, out: &mut Vec<Value>) {
    for item in items {
        match item {
            Value::Array(nested) if depth > 0 => flatten_into(nested, depth - 1, out),
            other => out.push(other.clone()),
        }
    }
}

impl Collection<Value> {
    /// The value at `path` of every element, `null` where it is missing.
    ///
    /// # Examples
    ///
    /// ```
    /// use collectable::collect;
    /// use serde_json::json;
    ///
    /// let users = collect([
    ///     json!({"name": "Ada", "address": {"city": "London"}}),
    ///     json!({"name": "Alan"}),
    /// ]);
    /// assert_eq!(users.pluck("name"), [json!("Ada"), json!("Alan")]);
    /// assert_eq!(users.pluck("address.city"), [json!("London"), json!(null)]);
    /// ```
    #[must_use]
    pub fn pluck(&self, path: &str) -> Self {
        self.map(|item| field(item, path).clone())
    }

    /// The value at `value_path` of every element, keyed by the value at
    /// `key_path`. Later elements win on duplicate keys.
    #[must_use]
    pub fn pluck_keyed(&self, value_path: &str, key_path: &str) -> Map<Value> {
        self.iter()
            .map(|item| {
                (
                    field(item, key_path).to_key(),
                    field(item, value_path).clone(),
                )
            })
            .collect()
    }

    /// Keeps only the given fields of every object element, in the order
    /// given. Missing fields are set to `null`.
    ///
    /// # Examples
    ///
    /// ```
    /// use collectable::collect;
    /// use serde_json::json;
    ///
    /// let users = collect([json!({"id": 1, "name": "Ada", "admin": true})]);
    /// assert_eq!(users.only(&["name", "email"]), [json!({"name": "Ada", "email": null})]);
    /// ```
    #[must_use]
    pub fn only(&self, keys: &[&str]) -> Self {
        map_objects(self, |object| {
            keys.iter()
                .map(|key| ((*key).to_owned(), object.get(*key).cloned().unwrap_or(Value::Null)))
                .collect()
        })
    }

    /// Removes the given fields from every object element.
    #[must_use]
    pub fn except(&self, keys: &[&str]) -> Self {
        map_objects(self, |object| {
            object
                .iter()
                .filter(|(key, _)| !keys.contains(&key.as_str()))
                .map(|(key, value)| (key.clone(), value.clone()))
                .collect()
        })
    }

    /// Removes one field from every object element.
    #[must_use]
    pub fn forget_key(&self, key: &str) -> Self {
        self.except(&[key])
    }

    /// Sets a field on every object element.
    pub fn put(&self, key: &str, value: impl Into<Value>) -> Self {
        let value = value.into();
        map_objects(self, |object| {
            let mut object = object.clone();
            object.insert(key.to_owned(), value.clone());
            object
        })
    }

    /// Overwrites the fields of every object element with the top-level
    /// fields of `patch`.
    ///
    /// Nested objects are replaced whole; see
    /// [`replace_recursive`](Self::replace_recursive) to descend into them.
    #[must_use]
    pub fn replace(&self, patch: &Value) -> Self {
        let Some(patch) = patch.as_object() else {
            return self.clone();
        };
        map_objects(self, |object| {
            let mut object = object.clone();
            for (key, value) in patch {
                object.insert(key.clone(), value.clone());
            }
            object
        })
    }

    /// Overwrites every element with `patch`, descending into objects and
    /// arrays.
    ///
    /// Elements are only patched by a value of the same container kind.
    ///
    /// # Examples
    ///
    /// ```
    /// use collectable::collect;
    /// use serde_json::json;
    ///
    /// let rows = collect([json!({"a": {"b": 1, "c": 2}})]);
    /// let patched = rows.replace_recursive(&json!({"a": {"b": 9}}));
    /// assert_eq!(patched, [json!({"a": {"b": 9, "c": 2}})]);
    /// ```
    #[must_use]
    pub fn replace_recursive(&self, patch: &Value) -> Self {
        let patch_kind = Kind::of(patch);
        self.map(|item| {
            if patch_kind.is_container() && Kind::of(item) == patch_kind {
                replace_values(item, patch)
            } else {
                item.clone()
            }
        })
    }

    /// Flattens the fields of every object element into dot-joined paths.
    ///
    /// Later elements overwrite earlier ones on identical paths. Arrays are
    /// leaves, and elements that are not objects are skipped.
    ///
    /// # Examples
    ///
    /// ```
    /// use collectable::collect;
    /// use serde_json::json;
    ///
    /// let config = collect([json!({"db": {"host": "x", "ports": [1, 2]}})]);
    /// let dotted = config.dot();
    /// assert_eq!(dotted["db.host"], json!("x"));
    /// assert_eq!(dotted["db.ports"], json!([1, 2]));
    /// ```
    #[must_use]
    pub fn dot(&self) -> Map<Value> {
        let mut flattened = serde_json::Map::new();
        for object in self.iter().filter_map(Value::as_object) {
            path::flatten_into(object, "", &mut flattened);
        }
        flattened.into_iter().collect()
    }

    /// Rebuilds a single nested object from the dot-joined fields of every
    /// object element.
    #[must_use]
    pub fn undot(&self) -> Value {
        path::undot(
            self.iter()
                .filter_map(Value::as_object)
                .flat_map(|object| object.iter().map(|(key, value)| (key.clone(), value.clone()))),
        )
    }

    /// Flattens nested arrays completely. Objects are left intact.
    #[must_use]
    pub fn flatten(&self) -> Self {
        self.flatten_depth(usize::MAX)
    }

    /// Flattens nested arrays `depth` levels deep. A depth of zero returns a
    /// copy.
    ///
    /// # Examples
    ///
    /// ```
    /// use collectable::collect;
    /// use serde_json::json;
    ///
    /// let nested = collect([json!(1), json!([2, [3, [4]]])]);
    /// assert_eq!(nested.flatten_depth(1), [json!(1), json!(2), json!([3, [4]])]);
    /// assert_eq!(nested.flatten(), [json!(1), json!(2), json!(3), json!(4)]);
    /// ```
    #[must_use]
    pub fn flatten_depth(&self, depth: usize) -> Self {
        let mut out = Vec::new();
        for item in self {
            match item {
                Value::Array(nested) if depth > 0 => flatten_into(nested, depth - 1, &mut out),
                other => out.push(other.clone()),
            }
        }
        out.into()
    }

    /// Deep-merges every list of `lists` into the receiver, in order.
    ///
    /// Elements at matching positions merge recursively: objects key by key,
    /// arrays by the same list rule, and scalars are overwritten by the later
    /// value. When both lists hold only scalars, the later list is appended.
    ///
    /// # Examples
    ///
    /// ```
    /// use collectable::collect;
    /// use serde_json::json;
    ///
    /// let base = collect([json!({"name": "Ada", "tags": ["a"]})]);
    /// let merged = base.merge_recursive([[json!({"tags": ["b"], "admin": true})]]);
    /// assert_eq!(merged, [json!({"name": "Ada", "tags": ["a", "b"], "admin": true})]);
    /// ```
    pub fn merge_recursive<L, I>(&self, lists: I) -> Self
    where
        L: AsRef<[Value]>,
        I: IntoIterator<Item = L>,
    {
        lists
            .into_iter()
            .fold(self.to_vec(), |merged, list| merge_lists(&merged, list.as_ref()))
            .into()
    }

    /// Returns `true` if some element has every field of `shape` with a
    /// loosely equal value.
    ///
    /// # Examples
    ///
    /// ```
    /// use collectable::collect;
    /// use serde_json::json;
    ///
    /// let users = collect([json!({"id": 1, "name": "Ada"}), json!({"id": 2, "name": "Alan"})]);
    /// assert!(users.contains_shape(&json!({"name": "Alan"})));
    /// assert!(!users.contains_shape(&json!({"name": "Alan", "id": 1})));
    /// ```
    #[must_use]
    pub fn contains_shape(&self, shape: &Value) -> bool {
        self.iter().any(|item| matches_shape(item, shape))
    }

    /// The distinct field names of all object elements, in first-seen
    /// order.
    #[must_use]
    pub fn field_keys(&self) -> Collection<String> {
        let mut keys: Map<()> = Map::default();
        for object in self.iter().filter_map(Value::as_object) {
            keys.extend(object.keys().map(|key| (key.clone(), ())));
        }
        keys.into_keys().collect()
    }

    /// Returns `true` if some element has a value at `path`.
    #[must_use]
    pub fn has(&self, path: &str) -> bool {
        self.iter().any(|item| path::get(item, path).is_some())
    }

    /// Returns `true` if some element has a value at any of `paths`.
    #[must_use]
    pub fn has_any(&self, paths: &[&str]) -> bool {
        paths.iter().any(|path| self.has(path))
    }

    /// The elements whose value at `path` is loosely equal to `value`.
    ///
    /// # Examples
    ///
    /// ```
    /// use collectable::collect;
    /// use serde_json::json;
    ///
    /// let products = collect([json!({"price": 100}), json!({"price": "200"})]);
    /// assert_eq!(products.where_eq("price", "100"), [json!({"price": 100})]);
    /// assert!(products.where_strict("price", "100").is_empty());
    /// ```
    pub fn where_eq(&self, path: &str, value: impl Into<Value>) -> Self {
        let value = value.into();
        self.filter(|item| field(item, path).loose_eq(&value))
    }

    /// The elements whose value at `path` is strictly equal to `value`.
    pub fn where_strict(&self, path: &str, value: impl Into<Value>) -> Self {
        let value = value.into();
        self.filter(|item| *field(item, path) == value)
    }

    /// The elements whose value at `path` is loosely equal to one of
    /// `values`.
    pub fn where_in<V, I>(&self, path: &str, values: I) -> Self
    where
        V: Into<Value>,
        I: IntoIterator<Item = V>,
    {
        let values: Vec<Value> = values.into_iter().map(Into::into).collect();
        self.filter(|item| {
            let found = field(item, path);
            values.iter().any(|value| found.loose_eq(value))
        })
    }

    /// The elements whose value at `path` is strictly equal to one of
    /// `values`.
    pub fn where_in_strict<V, I>(&self, path: &str, values: I) -> Self
    where
        V: Into<Value>,
        I: IntoIterator<Item = V>,
    {
        let values: Vec<Value> = values.into_iter().map(Into::into).collect();
        self.filter(|item| values.contains(field(item, path)))
    }

    /// The complement of [`where_in`](Self::where_in).
    pub fn where_not_in<V, I>(&self, path: &str, values: I) -> Self
    where
        V: Into<Value>,
        I: IntoIterator<Item = V>,
    {
        let values: Vec<Value> = values.into_iter().map(Into::into).collect();
        self.reject(|item| {
            let found = field(item, path);
            values.iter().any(|value| found.loose_eq(value))
        })
    }

    /// The complement of [`where_in_strict`](Self::where_in_strict).
    pub fn where_not_in_strict<V, I>(&self, path: &str, values: I) -> Self
    where
        V: Into<Value>,
        I: IntoIterator<Item = V>,
    {
        let values: Vec<Value> = values.into_iter().map(Into::into).collect();
        self.reject(|item| values.contains(field(item, path)))
    }

    /// The elements whose value at `path` lies within `low..=high`.
    ///
    /// Values that cannot be ordered against the bounds, such as strings
    /// against numeric bounds, are not between them.
    ///
    /// # Examples
    ///
    /// ```
    /// use collectable::collect;
    /// use serde_json::json;
    ///
    /// let people = collect([json!({"age": 17}), json!({"age": 30}), json!({"age": "old"})]);
    /// assert_eq!(people.where_between("age", 18, 65), [json!({"age": 30})]);
    /// assert_eq!(people.where_not_between("age", 18, 65).count(), 2);
    /// ```
    pub fn where_between(&self, path: &str, low: impl Into<Value>, high: impl Into<Value>) -> Self {
        let (low, high) = (low.into(), high.into());
        self.filter(|item| is_between(field(item, path), &low, &high))
    }

    /// The complement of [`where_between`](Self::where_between).
    pub fn where_not_between(
        &self,
        path: &str,
        low: impl Into<Value>,
        high: impl Into<Value>,
    ) -> Self {
        let (low, high) = (low.into(), high.into());
        self.reject(|item| is_between(field(item, path), &low, &high))
    }

    /// The elements whose value at `path` is `null` or missing.
    #[must_use]
    pub fn where_null(&self, path: &str) -> Self {
        self.filter(|item| field(item, path).is_null())
    }

    /// The elements with a non-null value at `path`.
    #[must_use]
    pub fn where_not_null(&self, path: &str) -> Self {
        self.reject(|item| field(item, path).is_null())
    }

    /// The first element whose value at `path` is loosely equal to `value`.
    pub fn first_where(&self, path: &str, value: impl Into<Value>) -> Option<&Value> {
        let value = value.into();
        self.first_matching(|item| field(item, path).loose_eq(&value))
    }

    /// Groups the elements by their value at `path`.
    #[must_use]
    pub fn group_by_field(&self, path: &str) -> Map<Self> {
        self.group_by(|item| field(item, path).clone())
    }

    /// Keys the elements by their value at `path`. Later elements win.
    #[must_use]
    pub fn key_by_field(&self, path: &str) -> Map<Value> {
        self.key_by(|item| field(item, path).clone())
    }

    /// The first-seen element of every value at `path` that occurs more
    /// than once, compared loosely.
    ///
    /// # Examples
    ///
    /// ```
    /// use collectable::collect;
    /// use serde_json::json;
    ///
    /// let users = collect([
    ///     json!({"id": 1, "name": "John"}),
    ///     json!({"id": 2, "name": "Jane"}),
    ///     json!({"id": 1, "name": "Jack"}),
    /// ]);
    /// assert_eq!(users.duplicates_by_field("id"), [json!({"id": 1, "name": "John"})]);
    /// ```
    #[must_use]
    pub fn duplicates_by_field(&self, path: &str) -> Self {
        first_of_repeated(self.all(), |a, b| field(a, path).loose_eq(field(b, path))).into()
    }

    /// Sorts the elements by their value at `path`, ascending. The sort is
    /// stable, and elements missing the field sort first.
    #[must_use]
    pub fn sort_by_field(&self, path: &str) -> Self {
        self.sort_by(|item| field(item, path).clone())
    }

    /// Sorts the elements by their value at `path`, descending.
    #[must_use]
    pub fn sort_by_field_desc(&self, path: &str) -> Self {
        self.sort_by_desc(|item| field(item, path).clone())
    }

    /// The elements sharing no field name with any element of `other`.
    pub fn diff_keys(&self, other: impl AsRef<[Value]>) -> Self {
        let other = other.as_ref();
        self.reject(|item| other.iter().any(|candidate| keys_overlap(item, candidate)))
    }

    /// The elements sharing a field name with some element of `other`.
    pub fn intersect_by_keys(&self, other: impl AsRef<[Value]>) -> Self {
        let other = other.as_ref();
        self.filter(|item| other.iter().any(|candidate| keys_overlap(item, candidate)))
    }

    /// Joins the values at `path` with `glue`, skipping `null` and missing
    /// values. Strings are joined without quotes.
    ///
    /// # Examples
    ///
    /// ```
    /// use collectable::collect;
    /// use serde_json::json;
    ///
    /// let users = collect([json!({"name": "Ada"}), json!({}), json!({"name": 7})]);
    /// assert_eq!(users.implode_field("name", ", "), "Ada, 7");
    /// ```
    #[must_use]
    pub fn implode_field(&self, path: &str, glue: &str) -> String {
        self.iter()
            .map(|item| field(item, path))
            .filter(|value| !value.is_null())
            .map(ToKey::to_key)
            .collect::<Vec<_>>()
            .join(glue)
    }
}

fn is_between(value: &Value, low: &Value, high: &Value) -> bool {
    value.ordinal_cmp(low).is_some_and(|ordering| ordering.is_ge())
        && value.ordinal_cmp(high).is_some_and(|ordering| ordering.is_le())
}
