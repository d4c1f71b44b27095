use serde::Deserialize;

pub mod dblp;
pub mod scholar;

/// Collaborators that collapse single-element XML lists hand us either one
/// value or a list of values under the same key.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum OneOrMany<T> {
    One(T),
    Many(Vec<T>),
}

impl<T> OneOrMany<T> {
    pub fn into_vec(self) -> Vec<T> {
        match self {
            OneOrMany::One(value) => vec![value],
            OneOrMany::Many(values) => values,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> {
        match self {
            OneOrMany::One(value) => std::slice::from_ref(value).iter(),
            OneOrMany::Many(values) => values.iter(),
        }
    }
}

impl<T> Default for OneOrMany<T> {
    fn default() -> Self {
        OneOrMany::Many(Vec::new())
    }
}

/// Year reported as either a bare integer or a numeric string, depending on
/// how the collaborator parsed the upstream response.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum YearField {
    Int(i64),
    Text(String),
}

impl YearField {
    pub fn as_year(&self) -> Option<i32> {
        match self {
            YearField::Int(value) => i32::try_from(*value).ok(),
            YearField::Text(text) => text.trim().parse().ok(),
        }
    }
}
