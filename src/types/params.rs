// src/types/params.rs
//! The parameter set sent with every Canvas request.
//!
//! Canvas takes all of its arguments in the query string, including
//! structured ones: `include[]=term&include[]=sections` for lists and
//! `course[name]=Intro` for objects. A `ParamSet` models exactly that shape,
//! an ordered map of top-level keys whose values are either a scalar or a
//! single level of grouped scalars. Deeper nesting is not representable.

use super::ValidationError;
use indexmap::IndexMap;
use serde_json::Value;
use std::fmt;

/// A single query value.
#[derive(Debug, Clone, PartialEq)]
pub enum Scalar {
    Text(String),
    Integer(i64),
    Float(f64),
    Bool(bool),
}

impl Scalar {
    /// Whether the value counts as "not provided" when applying defaults.
    ///
    /// Mirrors the loose emptiness Canvas integrations have always used:
    /// empty text, `"0"`, zero and `false` are all empty.
    pub fn is_empty(&self) -> bool {
        match self {
            Scalar::Text(s) => s.is_empty() || s == "0",
            Scalar::Integer(n) => *n == 0,
            Scalar::Float(x) => *x == 0.0,
            Scalar::Bool(b) => !b,
        }
    }

    fn from_json(value: &Value) -> Option<Self> {
        match value {
            Value::Null => Some(Scalar::Text(String::new())),
            Value::Bool(b) => Some(Scalar::Bool(*b)),
            Value::String(s) => Some(Scalar::Text(s.clone())),
            Value::Number(n) => Some(if let Some(i) = n.as_i64() {
                Scalar::Integer(i)
            } else if n.is_u64() {
                Scalar::Text(n.to_string())
            } else {
                Scalar::Float(n.as_f64().unwrap_or_default())
            }),
            Value::Array(_) | Value::Object(_) => None,
        }
    }
}

/// Booleans render as `1` and the empty string.
impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scalar::Text(s) => f.write_str(s),
            Scalar::Integer(n) => write!(f, "{}", n),
            Scalar::Float(x) => write!(f, "{}", x),
            Scalar::Bool(true) => f.write_str("1"),
            Scalar::Bool(false) => Ok(()),
        }
    }
}

impl From<&str> for Scalar {
    fn from(value: &str) -> Self {
        Scalar::Text(value.to_string())
    }
}

impl From<String> for Scalar {
    fn from(value: String) -> Self {
        Scalar::Text(value)
    }
}

impl From<&String> for Scalar {
    fn from(value: &String) -> Self {
        Scalar::Text(value.clone())
    }
}

impl From<bool> for Scalar {
    fn from(value: bool) -> Self {
        Scalar::Bool(value)
    }
}

impl From<f64> for Scalar {
    fn from(value: f64) -> Self {
        Scalar::Float(value)
    }
}

macro_rules! scalar_from_int {
    ($($t:ty),*) => {
        $(impl From<$t> for Scalar {
            fn from(value: $t) -> Self {
                Scalar::Integer(i64::from(value))
            }
        })*
    };
}

scalar_from_int!(i8, i16, i32, i64, u8, u16, u32);

impl From<u64> for Scalar {
    fn from(value: u64) -> Self {
        i64::try_from(value)
            .map(Scalar::Integer)
            .unwrap_or_else(|_| Scalar::Text(value.to_string()))
    }
}

impl From<usize> for Scalar {
    fn from(value: usize) -> Self {
        Scalar::from(value as u64)
    }
}

/// Key of an entry inside a grouped parameter.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum GroupKey {
    /// Positional entry of a repeated field; rendered as `key[]`.
    Index(usize),
    /// Named field of an object; rendered as `key[name]`.
    Name(String),
}

impl GroupKey {
    /// Text placed between the brackets.
    pub fn bracket_label(&self) -> &str {
        match self {
            GroupKey::Index(_) => "",
            GroupKey::Name(name) => name,
        }
    }

    /// Canonical decimal labels (`0`, `12`) are positions; anything else,
    /// `007` and `+1` included, stays a name.
    fn from_label(label: &str) -> Self {
        match label.parse::<usize>() {
            Ok(index) if index.to_string() == label => GroupKey::Index(index),
            _ => GroupKey::Name(label.to_string()),
        }
    }

    /// Position an appended `key[]` entry takes: one past the highest
    /// existing position, or 0.
    fn next_index(entries: &IndexMap<GroupKey, Scalar>) -> Self {
        let next = entries
            .keys()
            .filter_map(|key| match key {
                GroupKey::Index(i) => Some(i + 1),
                GroupKey::Name(_) => None,
            })
            .max()
            .unwrap_or(0);
        GroupKey::Index(next)
    }
}

/// Value of a top-level parameter.
#[derive(Debug, Clone, PartialEq)]
pub enum ParamValue {
    Scalar(Scalar),
    Group(IndexMap<GroupKey, Scalar>),
}

impl ParamValue {
    pub fn is_empty(&self) -> bool {
        match self {
            ParamValue::Scalar(s) => s.is_empty(),
            ParamValue::Group(entries) => entries.is_empty(),
        }
    }
}

impl From<Scalar> for ParamValue {
    fn from(value: Scalar) -> Self {
        ParamValue::Scalar(value)
    }
}

macro_rules! param_value_from_scalar {
    ($($t:ty),*) => {
        $(impl From<$t> for ParamValue {
            fn from(value: $t) -> Self {
                ParamValue::Scalar(Scalar::from(value))
            }
        })*
    };
}

param_value_from_scalar!(&str, String, &String, bool, f64, i8, i16, i32, i64, u8, u16, u32, u64, usize);

/// Ordered parameters for one request.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParamSet(IndexMap<String, ParamValue>);

impl ParamSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, key: &str) -> Option<&ParamValue> {
        self.0.get(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    pub fn iter(&self) -> indexmap::map::Iter<'_, String, ParamValue> {
        self.0.iter()
    }

    /// Sets `key`, keeping its original position if it was already present.
    pub fn insert(
        &mut self,
        key: impl Into<String>,
        value: impl Into<ParamValue>,
    ) -> Option<ParamValue> {
        self.0.insert(key.into(), value.into())
    }

    /// Builder form of [`ParamSet::insert`] for a scalar.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Scalar>) -> Self {
        self.insert(key, ParamValue::Scalar(value.into()));
        self
    }

    /// Adds a repeated field, encoded as `key[]=a&key[]=b`.
    pub fn with_list<I, V>(mut self, key: impl Into<String>, values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Scalar>,
    {
        let entries = values
            .into_iter()
            .enumerate()
            .map(|(i, v)| (GroupKey::Index(i), v.into()))
            .collect();
        self.insert(key, ParamValue::Group(entries));
        self
    }

    /// Adds an object field, encoded as `key[name]=value`.
    pub fn with_group<I, K, V>(mut self, key: impl Into<String>, fields: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<Scalar>,
    {
        let entries = fields
            .into_iter()
            .map(|(k, v)| (GroupKey::Name(k.into()), v.into()))
            .collect();
        self.insert(key, ParamValue::Group(entries));
        self
    }

    /// Sets `key` only when the caller left it absent or empty.
    pub fn with_default(mut self, key: &str, value: impl Into<Scalar>) -> Self {
        let missing = self.0.get(key).map_or(true, ParamValue::is_empty);
        if missing {
            self.insert(key, ParamValue::Scalar(value.into()));
        }
        self
    }

    /// Applies one `key=value`, `key[]=value` or `key[name]=value` assignment.
    ///
    /// Values are always text. A bracketed assignment onto a key that holds
    /// a scalar replaces it with a fresh group; a plain assignment replaces
    /// whatever was there.
    pub fn parse_assignment(&mut self, input: &str) -> Result<(), ValidationError> {
        let invalid = |reason: &str| ValidationError::InvalidParameter {
            input: input.to_string(),
            reason: reason.to_string(),
        };

        let (lhs, value) = input
            .split_once('=')
            .ok_or_else(|| invalid("expected key=value"))?;

        let Some(open) = lhs.find('[') else {
            if lhs.is_empty() || lhs.contains(']') {
                return Err(invalid("parameter name is empty or malformed"));
            }
            self.insert(lhs, value);
            return Ok(());
        };

        let key = &lhs[..open];
        let label = lhs[open + 1..]
            .strip_suffix(']')
            .ok_or_else(|| invalid("unterminated '['"))?;
        if key.is_empty() {
            return Err(invalid("parameter name is empty"));
        }
        if label.contains('[') || label.contains(']') {
            return Err(ValidationError::NestingTooDeep {
                key: key.to_string(),
            });
        }

        let slot = self
            .0
            .entry(key.to_string())
            .or_insert_with(|| ParamValue::Group(IndexMap::new()));
        if let ParamValue::Scalar(_) = slot {
            *slot = ParamValue::Group(IndexMap::new());
        }
        if let ParamValue::Group(entries) = slot {
            let group_key = if label.is_empty() {
                GroupKey::next_index(entries)
            } else {
                GroupKey::from_label(label)
            };
            entries.insert(group_key, Scalar::Text(value.to_string()));
        }
        Ok(())
    }

    /// Builds a set from a sequence of assignments, applied in order.
    pub fn from_assignments<I, S>(assignments: I) -> Result<Self, ValidationError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut params = Self::new();
        for assignment in assignments {
            params.parse_assignment(assignment.as_ref())?;
        }
        Ok(params)
    }
}

impl<'a> IntoIterator for &'a ParamSet {
    type Item = (&'a String, &'a ParamValue);
    type IntoIter = indexmap::map::Iter<'a, String, ParamValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Reads a JSON object such as `{"course": {"name": "N"}, "include": ["term"]}`.
///
/// Arrays become positional groups, objects become named groups (canonical
/// integer keys count as positions), `null` becomes empty text.
impl TryFrom<Value> for ParamSet {
    type Error = ValidationError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        let map = match value {
            Value::Object(map) => map,
            other => {
                return Err(ValidationError::InvalidParameter {
                    input: other.to_string(),
                    reason: "expected a JSON object".to_string(),
                })
            }
        };

        let mut params = ParamSet::new();
        for (key, value) in map {
            let too_deep = || ValidationError::NestingTooDeep { key: key.clone() };
            let param = match &value {
                Value::Array(items) => ParamValue::Group(
                    items
                        .iter()
                        .enumerate()
                        .map(|(i, item)| {
                            Scalar::from_json(item)
                                .map(|s| (GroupKey::Index(i), s))
                                .ok_or_else(too_deep)
                        })
                        .collect::<Result<_, _>>()?,
                ),
                Value::Object(fields) => ParamValue::Group(
                    fields
                        .iter()
                        .map(|(label, item)| {
                            Scalar::from_json(item)
                                .map(|s| (GroupKey::from_label(label), s))
                                .ok_or_else(too_deep)
                        })
                        .collect::<Result<_, _>>()?,
                ),
                scalar => ParamValue::Scalar(Scalar::from_json(scalar).ok_or_else(too_deep)?),
            };
            params.insert(key, param);
        }
        Ok(params)
    }
}
