//! Serde helpers for flexible deserialization.
//!
//! Response bodies go through [`parse_body`] before being mapped onto typed models. In
//! [`JsonMode::Tolerant`] the raw text may contain `//` and `/* */` comments and trailing commas,
//! and object keys are matched case-insensitively against struct field names by [`CaseInsensitive`].
//! Keys of maps and of untyped [`Value`] payloads are kept as sent.
//!
//! When the `tracing` feature is enabled, this module also logs warnings for any
//! unknown fields encountered during deserialization, helping detect API changes.

use chrono::{DateTime, NaiveDateTime, SecondsFormat, Utc};
use serde::Deserialize as _;
use serde::de::value::{MapDeserializer, SeqDeserializer};
use serde::de::{DeserializeOwned, IntoDeserializer, Visitor};
use serde_json::{Map, Value};

use crate::client::JsonMode;

/// A `serde_as` type that deserializes strings or integers as `String`.
///
/// Printify is not consistent about numeric versus string identifiers across endpoints (uploaded
/// image ids, shop order ids), so fields that see both use
/// `#[serde_as(as = "StringFromAny")]` or `#[serde_as(as = "Option<StringFromAny>")]`.
pub struct StringFromAny;

impl<'de> serde_with::DeserializeAs<'de, String> for StringFromAny {
    fn deserialize_as<D>(deserializer: D) -> std::result::Result<String, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        use std::fmt;

        use serde::de::{self, Visitor};

        struct StringOrNumberVisitor;

        impl Visitor<'_> for StringOrNumberVisitor {
            type Value = String;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("string or integer")
            }

            fn visit_str<E>(self, v: &str) -> std::result::Result<Self::Value, E>
            where
                E: de::Error,
            {
                Ok(v.to_owned())
            }

            fn visit_string<E>(self, v: String) -> std::result::Result<Self::Value, E>
            where
                E: de::Error,
            {
                Ok(v)
            }

            fn visit_i64<E>(self, v: i64) -> std::result::Result<Self::Value, E>
            where
                E: de::Error,
            {
                Ok(v.to_string())
            }

            fn visit_u64<E>(self, v: u64) -> std::result::Result<Self::Value, E>
            where
                E: de::Error,
            {
                Ok(v.to_string())
            }
        }

        deserializer.deserialize_any(StringOrNumberVisitor)
    }
}

impl serde_with::SerializeAs<String> for StringFromAny {
    fn serialize_as<S>(source: &String, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(source)
    }
}

/// A `serde_as` type for Printify timestamps.
///
/// Accepts RFC 3339 as well as the space separated `2020-01-09 07:29:43+00:00` form; a timestamp
/// without an offset is taken as UTC. Serializes as RFC 3339.
pub struct Timestamp;

impl<'de> serde_with::DeserializeAs<'de, DateTime<Utc>> for Timestamp {
    fn deserialize_as<D>(deserializer: D) -> std::result::Result<DateTime<Utc>, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;

        parse_timestamp(&raw)
            .ok_or_else(|| serde::de::Error::custom(format!("invalid timestamp: {raw}")))
    }
}

impl serde_with::SerializeAs<DateTime<Utc>> for Timestamp {
    fn serialize_as<S>(source: &DateTime<Utc>, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&source.to_rfc3339_opts(SecondsFormat::AutoSi, true))
    }
}

fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();

    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return Some(parsed.with_timezone(&Utc));
    }
    if let Ok(parsed) = DateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S%.f%:z") {
        return Some(parsed.with_timezone(&Utc));
    }

    NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S%.f")
        .ok()
        .map(|naive| naive.and_utc())
}

/// Parses a raw response body into a [`Value`].
///
/// A blank body is treated as JSON `null`, which list-returning calls turn into an empty list and
/// single-resource calls into `None`.
pub(crate) fn parse_body(text: &str, mode: JsonMode) -> crate::Result<Value> {
    if text.trim().is_empty() {
        return Ok(Value::Null);
    }

    match mode {
        JsonMode::Strict => Ok(serde_json::from_str(text)?),
        JsonMode::Tolerant => Ok(serde_json::from_str(&strip_comments_and_trailing_commas(
            text,
        ))?),
    }
}

/// Unwraps list envelopes.
///
/// Some list endpoints answer with a bare array, others wrap it in a paged object such as
/// `{"current_page": 1, "data": [...]}` or `{"variants": [...]}`. The first key from `keys` present
/// on an object (compared case-insensitively) is returned. An object carrying none of them has no
/// list and becomes `null`; arrays and `null` are passed through.
pub(crate) fn unwrap_list(value: Value, keys: &[&str]) -> Value {
    match value {
        Value::Object(mut map) if !keys.is_empty() => {
            for key in keys {
                if let Some(inner) = map.remove(*key) {
                    return inner;
                }
            }

            map.into_iter()
                .find(|(name, _)| keys.iter().any(|key| name.eq_ignore_ascii_case(key)))
                .map_or(Value::Null, |(_, inner)| inner)
        }
        other => other,
    }
}

/// Removes comments and trailing commas outside of string literals.
fn strip_comments_and_trailing_commas(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();
    let mut in_string = false;

    while let Some(ch) = chars.next() {
        if in_string {
            out.push(ch);
            match ch {
                '\\' => {
                    if let Some(escaped) = chars.next() {
                        out.push(escaped);
                    }
                }
                '"' => in_string = false,
                _ => {}
            }
            continue;
        }

        match ch {
            '"' => {
                in_string = true;
                out.push(ch);
            }
            '/' if chars.peek() == Some(&'/') => {
                for skipped in chars.by_ref() {
                    if skipped == '\n' {
                        out.push('\n');
                        break;
                    }
                }
            }
            '/' if chars.peek() == Some(&'*') => {
                chars.next();
                let mut previous = '\0';
                for skipped in chars.by_ref() {
                    if previous == '*' && skipped == '/' {
                        break;
                    }
                    previous = skipped;
                }
            }
            ',' => {
                // Drop the comma if the next significant character closes the container.
                if !matches!(next_significant(chars.clone()), Some(']' | '}')) {
                    out.push(ch);
                }
            }
            _ => out.push(ch),
        }
    }

    out
}

/// Returns the next character that is neither whitespace nor part of a comment.
fn next_significant(mut chars: std::iter::Peekable<std::str::Chars<'_>>) -> Option<char> {
    while let Some(ch) = chars.next() {
        match ch {
            c if c.is_whitespace() => {}
            '/' if chars.peek() == Some(&'/') => {
                for skipped in chars.by_ref() {
                    if skipped == '\n' {
                        break;
                    }
                }
            }
            '/' if chars.peek() == Some(&'*') => {
                chars.next();
                let mut previous = '\0';
                for skipped in chars.by_ref() {
                    if previous == '*' && skipped == '/' {
                        break;
                    }
                    previous = skipped;
                }
            }
            other => return Some(other),
        }
    }

    None
}

/// Deserializer over a parsed body that binds object keys to struct fields case-insensitively.
///
/// Only objects decoded into structs are matched against the struct's field names, so `"Title"`
/// binds to `title`. A key is left alone when the exact field name is also present. Maps, enums
/// and [`Value`] fields see the body as sent.
#[derive(Clone, Copy)]
pub(crate) struct CaseInsensitive<'value>(pub(crate) &'value Value);

impl<'de> serde::Deserializer<'de> for CaseInsensitive<'de> {
    type Error = serde_json::Error;

    fn deserialize_any<V: Visitor<'de>>(self, visitor: V) -> serde_json::Result<V::Value> {
        self.0.deserialize_any(visitor)
    }

    fn deserialize_option<V: Visitor<'de>>(self, visitor: V) -> serde_json::Result<V::Value> {
        match self.0 {
            Value::Null => visitor.visit_none(),
            _ => visitor.visit_some(self),
        }
    }

    fn deserialize_newtype_struct<V: Visitor<'de>>(
        self,
        _name: &'static str,
        visitor: V,
    ) -> serde_json::Result<V::Value> {
        visitor.visit_newtype_struct(self)
    }

    fn deserialize_seq<V: Visitor<'de>>(self, visitor: V) -> serde_json::Result<V::Value> {
        match self.0 {
            Value::Array(items) => visit_items(items, visitor),
            other => other.deserialize_seq(visitor),
        }
    }

    fn deserialize_tuple<V: Visitor<'de>>(
        self,
        _len: usize,
        visitor: V,
    ) -> serde_json::Result<V::Value> {
        self.deserialize_seq(visitor)
    }

    fn deserialize_tuple_struct<V: Visitor<'de>>(
        self,
        _name: &'static str,
        _len: usize,
        visitor: V,
    ) -> serde_json::Result<V::Value> {
        self.deserialize_seq(visitor)
    }

    fn deserialize_map<V: Visitor<'de>>(self, visitor: V) -> serde_json::Result<V::Value> {
        match self.0 {
            Value::Object(map) => {
                visit_entries(map.iter().map(|(key, value)| (key.as_str(), value)), visitor)
            }
            other => other.deserialize_map(visitor),
        }
    }

    fn deserialize_struct<V: Visitor<'de>>(
        self,
        name: &'static str,
        fields: &'static [&'static str],
        visitor: V,
    ) -> serde_json::Result<V::Value> {
        match self.0 {
            Value::Object(map) => visit_entries(bind_fields(map, fields), visitor),
            Value::Array(items) => visit_items(items, visitor),
            other => other.deserialize_struct(name, fields, visitor),
        }
    }

    fn deserialize_enum<V: Visitor<'de>>(
        self,
        name: &'static str,
        variants: &'static [&'static str],
        visitor: V,
    ) -> serde_json::Result<V::Value> {
        self.0.deserialize_enum(name, variants, visitor)
    }

    serde::forward_to_deserialize_any! {
        bool i8 i16 i32 i64 i128 u8 u16 u32 u64 u128 f32 f64 char str string
        bytes byte_buf unit unit_struct identifier ignored_any
    }
}

impl<'de> IntoDeserializer<'de, serde_json::Error> for CaseInsensitive<'de> {
    type Deserializer = Self;

    fn into_deserializer(self) -> Self {
        self
    }
}

fn visit_items<'de, V: Visitor<'de>>(
    items: &'de [Value],
    visitor: V,
) -> serde_json::Result<V::Value> {
    let mut access: SeqDeserializer<_, serde_json::Error> =
        SeqDeserializer::new(items.iter().map(CaseInsensitive));
    let value = visitor.visit_seq(&mut access)?;
    access.end()?;

    Ok(value)
}

fn visit_entries<'de, I, V>(entries: I, visitor: V) -> serde_json::Result<V::Value>
where
    I: IntoIterator<Item = (&'de str, &'de Value)>,
    V: Visitor<'de>,
{
    let mut access: MapDeserializer<'de, _, serde_json::Error> = MapDeserializer::new(
        entries
            .into_iter()
            .map(|(key, value)| (key, CaseInsensitive(value))),
    );
    let value = visitor.visit_map(&mut access)?;
    access.end()?;

    Ok(value)
}

/// Renames keys of `map` that differ from a field of `fields` only by case.
fn bind_fields<'value>(
    map: &'value Map<String, Value>,
    fields: &'static [&'static str],
) -> Vec<(&'value str, &'value Value)> {
    let mut claimed: Vec<&str> = Vec::new();

    map.iter()
        .map(|(key, value)| {
            let key = key.as_str();
            if fields.iter().any(|field| *field == key) {
                return (key, value);
            }

            let field = fields.iter().copied().find(|field| {
                field.eq_ignore_ascii_case(key)
                    && !map.contains_key(*field)
                    && !claimed.contains(field)
            });

            match field {
                Some(field) => {
                    claimed.push(field);
                    (field, value)
                }
                None => (key, value),
            }
        })
        .collect()
}

/// Maps `value` onto `T`, binding keys to fields case-insensitively in [`JsonMode::Tolerant`].
pub(crate) fn decode<T: DeserializeOwned>(value: &Value, mode: JsonMode) -> crate::Result<T> {
    match mode {
        JsonMode::Strict => deserialize_with_warnings(value, value),
        JsonMode::Tolerant => deserialize_with_warnings(value, CaseInsensitive(value)),
    }
}

/// Maps a response body onto `T` through `deserializer`, a view of `value`.
///
/// With the `tracing` feature, fields of the body that `T` does not model are logged at `warn`
/// (Printify adds fields to its payloads without notice), and a failure is logged together with
/// the path and value that could not be decoded. Unknown fields never fail the call.
#[cfg(feature = "tracing")]
fn deserialize_with_warnings<'de, D, T>(value: &Value, deserializer: D) -> crate::Result<T>
where
    D: serde::Deserializer<'de, Error = serde_json::Error> + Copy,
    T: DeserializeOwned,
{
    use std::any::type_name;

    tracing::trace!(type_name = %type_name::<T>(), json = %value, "deserializing response");

    let mut unknown = Vec::new();
    let decoded: serde_json::Result<T> =
        serde_ignored::deserialize(deserializer, |path| unknown.push(path.to_string()));

    let decoded = match decoded {
        Ok(decoded) => decoded,
        Err(e) => {
            if let Err(located) = serde_path_to_error::deserialize::<_, T>(deserializer) {
                let path = located.path().to_string();

                tracing::error!(
                    type_name = %type_name::<T>(),
                    path = %path,
                    value = %format_value(lookup_value(value, &path)),
                    error = %located.inner(),
                    "unable to decode response"
                );
            }
            return Err(e.into());
        }
    };

    for path in unknown {
        tracing::warn!(
            type_name = %type_name::<T>(),
            field = %path,
            value = %format_value(lookup_value(value, &path)),
            "unknown field in response"
        );
    }

    Ok(decoded)
}

#[cfg(not(feature = "tracing"))]
fn deserialize_with_warnings<'de, D, T>(_value: &Value, deserializer: D) -> crate::Result<T>
where
    D: serde::Deserializer<'de, Error = serde_json::Error> + Copy,
    T: DeserializeOwned,
{
    Ok(T::deserialize(deserializer)?)
}

/// Follows a `serde_ignored` or `serde_path_to_error` path (`data.0.sku`, `data[0].sku`,
/// `metadata.?.sku`) into `value`.
#[cfg(feature = "tracing")]
fn lookup_value<'value>(value: &'value Value, path: &str) -> Option<&'value Value> {
    path.split(['.', '[', ']'])
        .filter(|segment| !segment.is_empty() && *segment != "?")
        .try_fold(value, |current, segment| match current {
            Value::Object(map) => map.get(segment),
            Value::Array(items) => items.get(segment.parse::<usize>().ok()?),
            _ => None,
        })
}

#[cfg(feature = "tracing")]
fn format_value(value: Option<&Value>) -> String {
    value.map_or_else(|| "<missing>".to_owned(), Value::to_string)
}

#[cfg(test)]
mod tests {
    use serde::Deserialize;
    use serde_json::json;

    use super::*;

    #[derive(Debug, Deserialize, PartialEq)]
    struct Upload {
        id: String,
        file_name: String,
        #[serde(default)]
        height: Option<u32>,
    }

    #[test]
    fn blank_body_is_null() -> crate::Result<()> {
        assert_eq!(parse_body("", JsonMode::Strict)?, Value::Null);
        assert_eq!(parse_body("  \n", JsonMode::Tolerant)?, Value::Null);
        Ok(())
    }

    #[test]
    fn strict_mode_rejects_trailing_commas() {
        parse_body(r#"{"id": "1",}"#, JsonMode::Strict).unwrap_err();
    }

    #[test]
    fn tolerant_mode_accepts_trailing_commas_and_comments() -> crate::Result<()> {
        let body = r#"
            // uploaded image
            {
                "id": "5e16d66791287a0006e522b2", /* hex id */
                "file_name": "png-images-logo-1.jpg",
                "tags": ["a", "b",],
            }
        "#;

        let value = parse_body(body, JsonMode::Tolerant)?;

        assert_eq!(
            value,
            json!({
                "id": "5e16d66791287a0006e522b2",
                "file_name": "png-images-logo-1.jpg",
                "tags": ["a", "b"]
            })
        );
        Ok(())
    }

    #[test]
    fn tolerant_mode_keeps_string_contents() -> crate::Result<()> {
        let body = r#"{"url": "https://example.com/a,]//b", "note": "x /* y */ z",}"#;

        let value = parse_body(body, JsonMode::Tolerant)?;

        assert_eq!(value["url"], "https://example.com/a,]//b");
        assert_eq!(value["note"], "x /* y */ z");
        Ok(())
    }

    #[test]
    fn tolerant_mode_matches_keys_case_insensitively() -> crate::Result<()> {
        let body = r#"{"ID": "abc", "File_Name": "logo.png", "HEIGHT": 100}"#;

        let value = parse_body(body, JsonMode::Tolerant)?;
        let upload: Upload = decode(&value, JsonMode::Tolerant)?;

        assert_eq!(
            upload,
            Upload {
                id: "abc".to_owned(),
                file_name: "logo.png".to_owned(),
                height: Some(100),
            }
        );
        Ok(())
    }

    #[test]
    fn strict_mode_matches_keys_exactly() -> crate::Result<()> {
        let value = parse_body(r#"{"ID": "abc", "file_name": "logo.png"}"#, JsonMode::Strict)?;

        let result: crate::Result<Upload> = decode(&value, JsonMode::Strict);

        result.unwrap_err();
        Ok(())
    }

    #[test]
    fn case_insensitive_binding_reaches_nested_structs() -> crate::Result<()> {
        #[derive(Debug, Deserialize)]
        struct Page {
            data: Option<Vec<Upload>>,
        }

        let value = json!({
            "DATA": [
                {"Id": "1", "FILE_NAME": "a.png"},
                {"id": "2", "file_name": "b.png"}
            ]
        });
        let page: Page = decode(&value, JsonMode::Tolerant)?;
        let uploads = page.data.unwrap_or_default();

        assert_eq!(uploads.len(), 2);
        assert_eq!(uploads[0].id, "1");
        assert_eq!(uploads[0].file_name, "a.png");
        assert_eq!(uploads[1].file_name, "b.png");
        Ok(())
    }

    #[test]
    fn case_insensitive_binding_prefers_exact_keys() -> crate::Result<()> {
        let value = json!({"id": "exact", "ID": "other", "file_name": "a.png"});

        let upload: Upload = decode(&value, JsonMode::Tolerant)?;

        assert_eq!(upload.id, "exact");
        Ok(())
    }

    #[test]
    fn untyped_payloads_keep_their_keys() -> crate::Result<()> {
        #[derive(Debug, Deserialize)]
        struct Listing {
            title: String,
            #[serde(default)]
            sales_channel_properties: Vec<Value>,
            #[serde(default)]
            extra: std::collections::BTreeMap<String, Value>,
        }

        let body = r#"{
            "Title": "Tee",
            "sales_channel_properties": [{"ShopifyHandle": "Tee-Red", "Nested": {"SKU": 1}}],
            "Extra": {"CamelCase": true},
        }"#;

        let value = parse_body(body, JsonMode::Tolerant)?;
        let listing: Listing = decode(&value, JsonMode::Tolerant)?;

        assert_eq!(listing.title, "Tee");
        assert_eq!(
            listing.sales_channel_properties,
            vec![json!({"ShopifyHandle": "Tee-Red", "Nested": {"SKU": 1}})]
        );
        assert_eq!(listing.extra.get("CamelCase"), Some(&json!(true)));
        Ok(())
    }

    #[test]
    fn unwrap_list_handles_envelopes() {
        let paged = json!({"current_page": 1, "data": [1, 2]});
        let wrapped = json!({"variants": [3]});
        let bare = json!([4]);
        let shouting = json!({"DATA": [5]});

        assert_eq!(unwrap_list(paged, &["data"]), json!([1, 2]));
        assert_eq!(unwrap_list(wrapped, &["data", "variants"]), json!([3]));
        assert_eq!(unwrap_list(bare, &["data"]), json!([4]));
        assert_eq!(unwrap_list(shouting, &["data"]), json!([5]));
        assert_eq!(unwrap_list(Value::Null, &["data"]), Value::Null);
    }

    #[test]
    fn unwrap_list_without_list_key_is_null() {
        let empty_page = json!({"current_page": 1, "last_page": 1, "total": 0});

        assert_eq!(unwrap_list(empty_page, &["data"]), Value::Null);
        assert_eq!(unwrap_list(json!({}), &["variants"]), Value::Null);
        assert_eq!(
            unwrap_list(json!({"id": 1}), &[]),
            json!({"id": 1}),
            "objects pass through when no envelope is expected"
        );
    }

    #[test]
    fn decode_missing_required_field_fails() {
        let result: crate::Result<Upload> = decode(&json!({"id": "1"}), JsonMode::Tolerant);

        result.unwrap_err();
    }

    #[test]
    fn string_from_any_accepts_numbers() {
        #[serde_with::serde_as]
        #[derive(Deserialize)]
        struct Holder {
            #[serde_as(as = "StringFromAny")]
            id: String,
        }

        let numeric: Holder = serde_json::from_value(json!({"id": 42})).expect("numeric id");
        let text: Holder = serde_json::from_value(json!({"id": "42"})).expect("string id");

        assert_eq!(numeric.id, "42");
        assert_eq!(text.id, "42");
    }

    #[test]
    fn timestamp_accepts_printify_formats() {
        let expected = "2020-01-09T07:29:43Z";

        for raw in [
            "2020-01-09 07:29:43",
            "2020-01-09 07:29:43+00:00",
            "2020-01-09 09:29:43+02:00",
            "2020-01-09T07:29:43Z",
        ] {
            let parsed = parse_timestamp(raw).map(|t| t.to_rfc3339_opts(SecondsFormat::AutoSi, true));
            assert_eq!(parsed.as_deref(), Some(expected), "{raw}");
        }

        assert_eq!(parse_timestamp("yesterday"), None);
    }

    #[test]
    fn timestamp_round_trips_through_serde_as() -> crate::Result<()> {
        #[serde_with::serde_as]
        #[derive(Debug, Deserialize, serde::Serialize)]
        struct Holder {
            #[serde_as(as = "Option<Timestamp>")]
            at: Option<DateTime<Utc>>,
        }

        let holder: Holder = serde_json::from_value(json!({"at": "2017-04-18 13:24:28+00:00"}))?;
        let empty: Holder = serde_json::from_value(json!({}))?;

        assert_eq!(serde_json::to_value(&holder)?, json!({"at": "2017-04-18T13:24:28Z"}));
        assert!(empty.at.is_none(), "missing timestamp should be None");
        Ok(())
    }

    #[cfg(feature = "tracing")]
    #[test]
    fn lookup_value_follows_paths() {
        let value = json!({"data": [{"line_items": [{"sku": "A"}]}]});

        assert_eq!(
            lookup_value(&value, "data[0].line_items.0.sku"),
            Some(&json!("A"))
        );
        assert_eq!(lookup_value(&value, "data.5"), None);
        assert_eq!(lookup_value(&value, "data.0.?.line_items[0]"), Some(&json!({"sku": "A"})));
        assert_eq!(format_value(None), "<missing>");
    }
}
