//! Configuration for the query operations.

/// How [`UserQuery::most_frequent_last_name`](crate::UserQuery::most_frequent_last_name)
/// picks its winner among the counted last names.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LastNameSelection {
    /// The greatest last name in string order wins, whatever its count.
    #[default]
    ByName,
    /// The highest count wins; ties go to the greater last name.
    ByCount,
}

/// What [`UserQuery::convert_to`](crate::UserQuery::convert_to) joins.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum JoinProjection {
    /// Join last names; the mapping argument is ignored.
    #[default]
    LastName,
    /// Join the output of the mapping argument.
    Mapper,
}

/// Configuration for [`UserQuery`](crate::UserQuery).
///
/// The default reproduces the established behavior of every operation,
/// including the two quirks that [`QueryConfig::corrected`] switches off.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct QueryConfig {
    /// Winner selection for the most frequent last name.
    pub last_name_selection: LastNameSelection,

    /// Projection used when joining users into a string.
    pub join_projection: JoinProjection,
}

impl QueryConfig {
    /// Creates the default configuration.
    #[must_use]
    pub fn faithful() -> Self {
        Self::default()
    }

    /// Creates a configuration that selects by count and applies the mapper.
    #[must_use]
    pub fn corrected() -> Self {
        Self {
            last_name_selection: LastNameSelection::ByCount,
            join_projection: JoinProjection::Mapper,
        }
    }

    /// Builder method to set the last-name selection.
    #[must_use]
    pub fn with_last_name_selection(mut self, selection: LastNameSelection) -> Self {
        self.last_name_selection = selection;
        self
    }

    /// Builder method to set the join projection.
    #[must_use]
    pub fn with_join_projection(mut self, projection: JoinProjection) -> Self {
        self.join_projection = projection;
        self
    }

    /// Returns true if any setting departs from the default.
    #[must_use]
    pub fn is_corrected(&self) -> bool {
        *self != Self::default()
    }
}
