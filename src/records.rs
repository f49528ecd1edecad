// src/records.rs

use serde::Deserialize;

/// Year values arrive as a bare integer in some dataset vintages and as a
/// string in others; decode both.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Scalar {
    Int(i64),
    Text(String),
}

impl std::fmt::Display for Scalar {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Scalar::Int(n) => write!(f, "{}", n),
            Scalar::Text(s) => f.write_str(s),
        }
    }
}

/// One enrollment statistic row as decoded from the records endpoint.
///
/// The feed omits or nulls any of these freely; every field stays optional
/// and the renderer substitutes a placeholder at display time. Wire names
/// for college/program/count differ from the display names.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Record {
    #[serde(default)]
    pub year: Option<Scalar>,
    #[serde(default)]
    pub semester: Option<String>,
    #[serde(default, rename = "colleges")]
    pub college: Option<String>,
    #[serde(default, rename = "the_programs")]
    pub program: Option<String>,
    #[serde(default)]
    pub nationality: Option<String>,
    #[serde(default, rename = "number_of_students")]
    pub student_count: Option<i64>,
}

/// Envelope of the Explore v2.1 records endpoint. Unknown keys are
/// ignored; a missing `results` key decodes as an empty collection.
#[derive(Debug, Deserialize)]
pub struct RecordsResponse {
    #[serde(default)]
    pub total_count: Option<u64>,
    #[serde(default)]
    pub results: Vec<Record>,
}

/// The three mutually exclusive results of one fetch pass. Errors are
/// already folded to their display message by the time one of these
/// exists.
#[derive(Debug, Clone, PartialEq)]
pub enum FetchOutcome {
    Success(Vec<Record>),
    Empty,
    Failure(String),
}
