pub mod dutch_pay;
pub mod finalize;
pub mod poll;
pub mod schedule;
pub mod venues;

use serde::de::DeserializeOwned;
use serde_json::Value;

/// Deserialize tool arguments permissively: an absent or null argument map
/// behaves as `{}` so missing fields take their declared defaults. A field
/// present with the wrong type is an error the caller turns into an
/// operation-level failure.
pub fn parse_args<T: DeserializeOwned>(args: Value) -> Result<T, String> {
    let args = match args {
        Value::Null => Value::Object(serde_json::Map::new()),
        other => other,
    };
    serde_json::from_value(args).map_err(|e| format!("invalid arguments: {e}"))
}
