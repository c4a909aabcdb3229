use serde::{Deserialize, Serialize};

/// One dictionary sense: the definition text and an optional usage sentence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Definition {
    #[serde(rename = "definition")]
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub example: Option<String>,
}

/// Definitions grouped under one grammatical role.
///
/// `part_of_speech` is whatever the service sent ("noun", "verb", ...);
/// it is not validated against an enum.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Meaning {
    #[serde(rename = "partOfSpeech")]
    pub part_of_speech: String,
    #[serde(default)]
    pub definitions: Vec<Definition>,
}

/// One headword's full record as returned by the dictionary service.
///
/// The service sends more fields than we model (`phonetics`, `origin`,
/// `sourceUrls`, ...); unknown fields are ignored on decode. `word` may
/// differ in case or diacritics from what the user typed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WordEntry {
    pub word: String,
    #[serde(default)]
    pub phonetic: String,
    #[serde(default)]
    pub meanings: Vec<Meaning>,
}
