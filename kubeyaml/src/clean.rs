use serde_yaml::{Mapping, Value as YamlValue};

use crate::error::{Error, Result};

/// Metadata entry dropped from every object before it is printed.
pub const HIDDEN_FIELD: &str = "managedFields";

const METADATA: &str = "metadata";

/// A single kubernetes object as returned by `kubectl get -o yaml`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Document(Mapping);

impl Document {
    /// Empty input decodes to an empty document. Input that is not UTF-8, or whose top level
    /// value is not a mapping, is rejected.
    pub fn parse(input: impl AsRef<[u8]>) -> Result<Document> {
        let input = input.as_ref();
        if input.iter().all(u8::is_ascii_whitespace) {
            return Ok(Document::default());
        }

        match serde_yaml::from_slice::<YamlValue>(input).map_err(Error::Decode)? {
            YamlValue::Mapping(mapping) => Ok(Document(mapping)),
            YamlValue::Null => Ok(Document::default()),
            // let serde_yaml word the type mismatch
            other => serde_yaml::from_value(other)
                .map(Document)
                .map_err(Error::Decode),
        }
    }

    /// Removes [`HIDDEN_FIELD`] from `metadata`, returning it if it was there.
    ///
    /// Documents without a `metadata` mapping are left alone. Remaining keys keep their order.
    pub fn strip_hidden_field(&mut self) -> Option<YamlValue> {
        let metadata = self
            .0
            .get_mut(&YamlValue::from(METADATA))
            .and_then(YamlValue::as_mapping_mut)?;

        metadata.remove(&YamlValue::from(HIDDEN_FIELD))
    }

    pub fn metadata(&self) -> Option<&Mapping> {
        self.0
            .get(&YamlValue::from(METADATA))
            .and_then(YamlValue::as_mapping)
    }

    pub fn to_yaml(&self) -> Result<String> {
        let text = serde_yaml::to_string(&self.0).map_err(Error::Encode)?;
        // kubectl prints no document marker
        Ok(match text.strip_prefix("---\n") {
            Some(body) => body.to_owned(),
            None => text,
        })
    }
}
