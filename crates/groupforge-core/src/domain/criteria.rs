//! Grouping criteria selected by the caller.

use crate::error::{GroupForgeError, Result};

use super::WeightedField;

/// Whether clustering gathers alike entries or spreads them apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Objective {
    /// Groups hold entries that are close to each other.
    #[default]
    Similarity,
    /// Groups hold entries that are far from each other.
    Diversity,
}

/// Criteria for similarity or diversity clustering.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ClusterCriteria {
    pub fields: Vec<WeightedField>,
    pub group_count: usize,
    #[cfg_attr(feature = "serde", serde(default))]
    pub variety_weight: Option<f64>,
}

impl ClusterCriteria {
    pub fn new(fields: Vec<WeightedField>, group_count: usize) -> Self {
        Self {
            fields,
            group_count,
            variety_weight: None,
        }
    }

    pub fn with_variety_weight(mut self, weight: f64) -> Self {
        self.variety_weight = Some(weight);
        self
    }
}

/// Criteria for balanced team formation.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BalancedCriteria {
    pub balance_fields: Vec<WeightedField>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub partition_fields: Vec<String>,
    pub team_count: usize,
    #[cfg_attr(feature = "serde", serde(default))]
    pub variety_weight: Option<f64>,
}

impl BalancedCriteria {
    pub fn new(balance_fields: Vec<WeightedField>, team_count: usize) -> Self {
        Self {
            balance_fields,
            partition_fields: Vec::new(),
            team_count,
            variety_weight: None,
        }
    }

    /// Adds categorical fields whose values must be spread across teams.
    pub fn with_partition_fields<I, T>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        self.partition_fields = fields.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_variety_weight(mut self, weight: f64) -> Self {
        self.variety_weight = Some(weight);
        self
    }
}

/// A grouping request.
///
/// # Example
///
/// ```
/// use groupforge_core::{Criteria, WeightedField};
///
/// let split = Criteria::split(["gender"]);
/// assert!(split.validate().is_ok());
///
/// let empty = Criteria::similarity(Vec::<WeightedField>::new(), 2);
/// assert!(empty.validate().is_err());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "type", rename_all = "snake_case"))]
pub enum Criteria {
    /// Exact-match split by one or two attributes.
    Split { field_ids: Vec<String> },
    Similarity(ClusterCriteria),
    Diversity(ClusterCriteria),
    Balanced(BalancedCriteria),
}

impl Criteria {
    pub fn split<I, T>(field_ids: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        Criteria::Split {
            field_ids: field_ids.into_iter().map(Into::into).collect(),
        }
    }

    pub fn similarity(fields: Vec<WeightedField>, group_count: usize) -> Self {
        Criteria::Similarity(ClusterCriteria::new(fields, group_count))
    }

    pub fn diversity(fields: Vec<WeightedField>, group_count: usize) -> Self {
        Criteria::Diversity(ClusterCriteria::new(fields, group_count))
    }

    pub fn balanced(balance_fields: Vec<WeightedField>, team_count: usize) -> Self {
        Criteria::Balanced(BalancedCriteria::new(balance_fields, team_count))
    }

    /// Returns the clustering objective, if this is a clustering request.
    pub fn objective(&self) -> Option<Objective> {
        match self {
            Criteria::Similarity(_) => Some(Objective::Similarity),
            Criteria::Diversity(_) => Some(Objective::Diversity),
            _ => None,
        }
    }

    /// Checks structural well-formedness.
    ///
    /// The algorithms assume well-formed criteria; callers run this before
    /// invoking them.
    ///
    /// # Errors
    ///
    /// Returns [`GroupForgeError::InvalidCriteria`] for empty field lists,
    /// more than two split fields, non-positive counts, or weights that are
    /// negative or non-finite.
    pub fn validate(&self) -> Result<()> {
        match self {
            Criteria::Split { field_ids } => {
                if field_ids.is_empty() || field_ids.len() > 2 {
                    return Err(GroupForgeError::InvalidCriteria(format!(
                        "split requires 1 or 2 fields, got {}",
                        field_ids.len()
                    )));
                }
                Ok(())
            }
            Criteria::Similarity(c) | Criteria::Diversity(c) => {
                validate_fields(&c.fields)?;
                validate_count("group_count", c.group_count)?;
                validate_variety(c.variety_weight)
            }
            Criteria::Balanced(c) => {
                validate_fields(&c.balance_fields)?;
                validate_count("team_count", c.team_count)?;
                validate_variety(c.variety_weight)
            }
        }
    }
}

fn validate_fields(fields: &[WeightedField]) -> Result<()> {
    if fields.is_empty() {
        return Err(GroupForgeError::InvalidCriteria(
            "at least one field is required".to_string(),
        ));
    }
    if let Some(bad) = fields
        .iter()
        .find(|f| !f.weight.is_finite() || f.weight < 0.0)
    {
        return Err(GroupForgeError::InvalidCriteria(format!(
            "field '{}' has invalid weight {}",
            bad.field_id, bad.weight
        )));
    }
    Ok(())
}

fn validate_count(name: &str, count: usize) -> Result<()> {
    if count == 0 {
        return Err(GroupForgeError::InvalidCriteria(format!(
            "{name} must be positive"
        )));
    }
    Ok(())
}

fn validate_variety(weight: Option<f64>) -> Result<()> {
    match weight {
        Some(w) if !w.is_finite() || w < 0.0 => Err(GroupForgeError::InvalidCriteria(format!(
            "variety_weight must be a non-negative number, got {w}"
        ))),
        _ => Ok(()),
    }
}
