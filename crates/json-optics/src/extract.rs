//! Bridge between JSON values and statically-typed values.

use json_optics_core::Optional;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

/// A partial accessor from a JSON value onto a decoded `A`.
///
/// The read decodes through serde and treats a decode failure as an absent
/// focus rather than an error. The write re-encodes the focus, but only when
/// the current value decodes as an `A`; on any failure the source is
/// returned unchanged.
pub(crate) fn decoded<A>() -> Optional<Value, A>
where
    A: Serialize + DeserializeOwned + 'static,
{
    Optional::new(
        |source: &Value| serde_json::from_value(source.clone()).ok(),
        |source, focus: A| {
            if serde_json::from_value::<A>(source.clone()).is_ok() {
                serde_json::to_value(&focus).unwrap_or(source)
            } else {
                source
            }
        },
    )
}
