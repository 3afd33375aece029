//! Nest flat HTML form fields into JSON-shaped trees.
//!
//! Form serialization yields a flat, ordered list of name/value pairs.
//! This crate folds that list into one nested [`serde_json::Value`] tree,
//! with a separator (default `.`) and square brackets marking nesting:
//!
//! ```
//! use serde_json::json;
//!
//! let tree = formtree::serialize([
//!     ("user.name", "Ada"),
//!     ("user.langs[]", "rust"),
//!     ("user.langs[]", "js"),
//!     ("pets[0].kind", "cat"),
//! ])
//! .unwrap();
//!
//! assert_eq!(
//!     tree,
//!     json!({
//!         "user": {"name": "Ada", "langs": ["rust", "js"]},
//!         "pets": [{"kind": "cat"}],
//!     })
//! );
//! ```
//!
//! Reading the form itself is out of scope; any source of ordered
//! name/value pairs works. Serialization is total by default: malformed
//! names degrade best-effort instead of erroring. Opt into
//! [`SerializeOptions::with_strict`] to turn shape conflicts into errors.

pub mod error;
pub mod field;
pub mod options;

mod path;
mod tree;

use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

pub use crate::error::Error;
pub use crate::field::Field;
pub use crate::options::{SerializeOptions, DEFAULT_SEPARATOR};

pub type Result<T> = std::result::Result<T, Error>;

/// Serialize fields into a nested tree with default options.
pub fn serialize<I>(fields: I) -> Result<Value>
where
    I: IntoIterator,
    I::Item: Into<Field>,
{
    serialize_with_options(fields, &SerializeOptions::default())
}

/// Serialize fields into a nested tree.
///
/// Fields are processed in input order; a field without a value
/// contributes the empty string. The root is always an object.
pub fn serialize_with_options<I>(fields: I, options: &SerializeOptions) -> Result<Value>
where
    I: IntoIterator,
    I::Item: Into<Field>,
{
    let mut root = Map::new();
    for field in fields {
        let field = field.into();
        let segments = path::split_name(&field.name, options.separator);
        let value = field.value_or_empty().to_string();
        tree::insert_field(&mut root, &field.name, &segments, value, options)?;
    }
    Ok(Value::Object(root))
}

/// Serialize fields, then deserialize the tree into a typed value.
///
/// ```
/// use serde::Deserialize;
///
/// #[derive(Deserialize)]
/// struct Login {
///     user: String,
///     remember: String,
/// }
///
/// let login: Login =
///     formtree::from_fields([("user", "ada"), ("remember", "on")]).unwrap();
/// assert_eq!(login.user, "ada");
/// assert_eq!(login.remember, "on");
/// ```
pub fn from_fields<T, I>(fields: I) -> Result<T>
where
    T: DeserializeOwned,
    I: IntoIterator,
    I::Item: Into<Field>,
{
    from_fields_with_options(fields, &SerializeOptions::default())
}

pub fn from_fields_with_options<T, I>(fields: I, options: &SerializeOptions) -> Result<T>
where
    T: DeserializeOwned,
    I: IntoIterator,
    I::Item: Into<Field>,
{
    let value = serialize_with_options(fields, options)?;
    Ok(serde_json::from_value(value)?)
}
