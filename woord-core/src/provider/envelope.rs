//! Wire envelopes of the list provider.
//!
//! Only the fields the pipeline reads are modelled. Every field defaults so
//! missing keys and `null` values decode to empty values, and unknown keys
//! are ignored.

use serde::{Deserialize, Deserializer, Serialize};
use tracing::warn;

use super::client::Session;
use crate::error::{Result, WoordError};
use crate::list::{Languages, WordList, WordPair, WordPairs};

/// Decode a `null` like a missing key
fn null_as_default<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Credentials posted to the token endpoint
#[derive(Debug, Clone, Serialize)]
pub struct TokenRequest<'a> {
    pub email: &'a str,
    pub password: &'a str,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct TokenResponse {
    #[serde(default)]
    pub auth_token: Option<String>,
}

impl TokenResponse {
    /// A missing or empty token is an authentication failure
    pub fn into_session(self) -> Result<Session> {
        match self.auth_token {
            Some(token) if !token.is_empty() => Ok(Session::new(token)),
            _ => Err(WoordError::Auth("no token in response".to_string())),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchEnvelope {
    #[serde(default, deserialize_with = "null_as_default")]
    pub result_sections: Vec<ResultSection>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ResultSection {
    #[serde(default, deserialize_with = "null_as_default")]
    pub results: Vec<SearchResult>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchResult {
    #[serde(default, deserialize_with = "null_as_default")]
    pub id: String,
}

impl SearchEnvelope {
    /// Ids of the first result section, sorted by plain string order.
    ///
    /// The provider's relevance order is discarded.
    pub fn official_list_ids(&self) -> Vec<String> {
        let Some(section) = self.result_sections.first() else {
            return Vec::new();
        };

        let mut ids: Vec<String> = section
            .results
            .iter()
            .filter(|r| !r.id.is_empty())
            .map(|r| r.id.clone())
            .collect();
        ids.sort();
        ids
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListDetail {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub subjects: Vec<Subject>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub words_with_performance: Vec<WordRecord>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Subject {
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub language: SubjectLanguage,
}

impl Subject {
    /// Language name, falling back to the subject name
    pub fn display_name(&self) -> &str {
        if self.language.name.is_empty() {
            &self.name
        } else {
            &self.language.name
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SubjectLanguage {
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct WordRecord {
    /// A `null` entry makes the whole record unusable
    #[serde(default, deserialize_with = "null_as_default")]
    pub words: Vec<Option<String>>,
}

/// A detail envelope turned into a list, plus the records that were skipped
#[derive(Debug, Clone)]
pub struct ShapedList {
    pub list: WordList,
    pub skipped_records: usize,
}

impl ListDetail {
    /// Validate and flatten into a `WordList`.
    ///
    /// Fewer than two subjects is an error. Records that do not hold exactly
    /// one source/target pair are skipped.
    pub fn into_word_list(self, id: &str) -> Result<ShapedList> {
        let names: Vec<&str> = self.subjects.iter().map(Subject::display_name).collect();
        let languages =
            Languages::from_names(&names).ok_or_else(|| WoordError::MissingLanguages {
                id: id.to_string(),
                found: names.len(),
            })?;

        let mut pairs = WordPairs::default();
        let mut skipped_records = 0;

        for (index, record) in self.words_with_performance.into_iter().enumerate() {
            let found = record.words.len();
            let words: Option<Vec<String>> = record.words.into_iter().collect();
            match words.map(<[String; 2]>::try_from) {
                Some(Ok([source, target])) => pairs.push(WordPair { source, target }),
                _ => {
                    warn!(list = id, index, found, "skipping word record");
                    skipped_records += 1;
                }
            }
        }

        let name = self
            .title
            .filter(|t| !t.is_empty())
            .unwrap_or_else(|| format!("List {id}"));

        Ok(ShapedList {
            list: WordList::new(id, name, languages, pairs),
            skipped_records,
        })
    }
}

/// Decode a JSON body, naming what was decoded on failure
pub fn decode<T: serde::de::DeserializeOwned>(what: &str, body: &str) -> Result<T> {
    serde_json::from_str(body).map_err(|source| WoordError::Decode {
        what: what.to_string(),
        source,
    })
}
