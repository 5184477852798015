use super::port::FormPort;
use serde::{Deserialize, Serialize};

/// Identifies one text field on the input surface.
///
/// The serialized names match the element ids of the web console, so a
/// `fieldErrors` map can be applied to the page without translation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Field {
    ContentString,
    ContentObject,
    ObjectIndexes,
    StopWords,
    QueryStrings,
}

impl Field {
    /// Fields that make up the index submission surface.
    pub const INDEX_FIELDS: [Field; 4] = [
        Field::ContentString,
        Field::ContentObject,
        Field::ObjectIndexes,
        Field::StopWords,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Field::ContentString => "contentString",
            Field::ContentObject => "contentObject",
            Field::ObjectIndexes => "objectIndexes",
            Field::StopWords => "stopWords",
            Field::QueryStrings => "queryStrings",
        }
    }
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The four raw index fields, read once per submission attempt.
///
/// Both the validator and the request builder consume the same snapshot, so
/// what gets sent is exactly what was judged.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RawIndexInput {
    pub content_string: String,
    pub content_object: String,
    pub object_indexes: String,
    pub stop_words: String,
}

impl RawIndexInput {
    pub fn read_from(form: &dyn FormPort) -> Self {
        Self {
            content_string: form.read(Field::ContentString),
            content_object: form.read(Field::ContentObject),
            object_indexes: form.read(Field::ObjectIndexes),
            stop_words: form.read(Field::StopWords),
        }
    }

    /// Writes every field of the snapshot onto a form.
    pub fn fill(&self, form: &dyn FormPort) {
        form.write(Field::ContentString, &self.content_string);
        form.write(Field::ContentObject, &self.content_object);
        form.write(Field::ObjectIndexes, &self.object_indexes);
        form.write(Field::StopWords, &self.stop_words);
    }
}
