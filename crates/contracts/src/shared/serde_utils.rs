//! Lenient field decoding for backend rows

use serde::{Deserialize, Deserializer};

/// Reads `null` as `T::default()`.
///
/// Pair with `#[serde(default)]` so an absent field is accepted too:
///
/// ```
/// use contracts::shared::serde_utils::null_as_default;
///
/// #[derive(serde::Deserialize)]
/// struct Row {
///     #[serde(default, deserialize_with = "null_as_default")]
///     channel: String,
/// }
///
/// let row: Row = serde_json::from_str(r#"{ "channel": null }"#).unwrap();
/// assert_eq!(row.channel, "");
/// ```
pub fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
