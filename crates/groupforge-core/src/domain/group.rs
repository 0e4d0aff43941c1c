//! Grouping output.

/// One output group: a name and its ordered member ids.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GroupResult {
    pub group_name: String,
    pub member_ids: Vec<String>,
}

impl GroupResult {
    pub fn new(group_name: impl Into<String>, member_ids: Vec<String>) -> Self {
        Self {
            group_name: group_name.into(),
            member_ids,
        }
    }

    pub fn len(&self) -> usize {
        self.member_ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.member_ids.is_empty()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.member_ids.iter().any(|m| m == id)
    }
}
