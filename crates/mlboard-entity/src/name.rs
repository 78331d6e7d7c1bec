//! Unique names for addressing entities
//!
//! Provides [`UniqueName`] for hierarchical addressing of dashboard entities.

use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Separator joining unique-name segments.
pub const SEPARATOR: char = '.';

/// Entity kinds known to the dashboard store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityKind {
    /// Top-level project owned by a user
    Project,
    /// Experiment run inside a project
    Experiment,
    /// Experiment group (hyperparameter search)
    Group,
    /// Standalone job inside a project
    Job,
    /// Image build job inside a project
    Build,
    /// Worker job belonging to an experiment
    ExperimentJob,
    /// Status entry attached to a run (keyed by numeric id, not name)
    Status,
}

impl EntityKind {
    /// Expected segment count of this kind's unique names
    ///
    /// `None` for kinds that are not keyed by unique name (statuses).
    #[inline]
    #[must_use]
    pub fn arity(self) -> Option<usize> {
        match self {
            EntityKind::Project => Some(2),
            EntityKind::Experiment | EntityKind::Group => Some(3),
            EntityKind::Job | EntityKind::Build | EntityKind::ExperimentJob => Some(4),
            EntityKind::Status => None,
        }
    }

    /// Stable lowercase name of the kind
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            EntityKind::Project => "project",
            EntityKind::Experiment => "experiment",
            EntityKind::Group => "group",
            EntityKind::Job => "job",
            EntityKind::Build => "build",
            EntityKind::ExperimentJob => "experiment_job",
            EntityKind::Status => "status",
        }
    }
}

impl Display for EntityKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Hierarchical unique name of a dashboard entity
///
/// The unique name encodes an entity's ownership path as `.`-joined
/// segments and is the primary key into the normalized store. Numeric
/// server ids are secondary.
///
/// # Examples
/// - `alice.proj1` → a project
/// - `alice.proj1.3` → an experiment (or group)
/// - `alice.proj1.builds.1` → a build
/// - `alice.proj1.3.7` → an experiment job
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct UniqueName(String);

impl TryFrom<String> for UniqueName {
    type Error = NameError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::parse(&s)
    }
}

impl From<UniqueName> for String {
    fn from(name: UniqueName) -> Self {
        name.0
    }
}

impl UniqueName {
    /// Build a unique name by joining segments with [`SEPARATOR`]
    ///
    /// # Errors
    /// Returns [`NameError::EmptySegment`] for an empty segment list or an
    /// empty segment, and [`NameError::SeparatorInSegment`] when a segment
    /// itself contains the separator.
    pub fn from_segments<I, S>(segments: I) -> Result<Self, NameError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut joined = String::new();
        let mut count = 0usize;
        for segment in segments {
            let segment = segment.as_ref();
            if segment.is_empty() {
                return Err(NameError::EmptySegment);
            }
            if segment.contains(SEPARATOR) {
                return Err(NameError::SeparatorInSegment(segment.to_string()));
            }
            if count > 0 {
                joined.push(SEPARATOR);
            }
            joined.push_str(segment);
            count += 1;
        }
        if count == 0 {
            return Err(NameError::EmptySegment);
        }
        Ok(Self(joined))
    }

    /// Parse a unique name, validating segment shape but not arity
    ///
    /// # Errors
    /// Returns [`NameError::EmptySegment`] when the string is empty or
    /// contains consecutive separators.
    pub fn parse(s: &str) -> Result<Self, NameError> {
        Self::from_segments(s.split(SEPARATOR))
    }

    /// Parse a unique name and validate it against an entity kind's arity
    ///
    /// This is the inverse of [`UniqueName::from_segments`] for the given
    /// kind.
    ///
    /// # Errors
    /// Returns [`NameError::WrongArity`] when the segment count does not
    /// match the kind's expected arity, [`NameError::NotNameKeyed`] for
    /// kinds without unique names, and the [`UniqueName::parse`] errors for
    /// malformed input.
    pub fn parse_for(kind: EntityKind, s: &str) -> Result<Self, NameError> {
        let expected = kind.arity().ok_or(NameError::NotNameKeyed(kind))?;
        let name = Self::parse(s)?;
        let found = name.len();
        if found != expected {
            return Err(NameError::WrongArity {
                name: s.to_string(),
                kind,
                expected,
                found,
            });
        }
        Ok(name)
    }

    /// Ordered segments of the name
    #[inline]
    #[must_use]
    pub fn segments(&self) -> Vec<&str> {
        self.0.split(SEPARATOR).collect()
    }

    /// Number of segments
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.split(SEPARATOR).count()
    }

    /// Whether the name has no segments (never true for a parsed name)
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// First segment (the owner)
    #[inline]
    #[must_use]
    pub fn first(&self) -> &str {
        self.0.split(SEPARATOR).next().unwrap_or("")
    }

    /// Last segment (the local id)
    #[inline]
    #[must_use]
    pub fn last(&self) -> &str {
        self.0.rsplit(SEPARATOR).next().unwrap_or("")
    }

    /// Parent name with the trailing segment stripped
    ///
    /// Exact inverse of [`UniqueName::child`]: for any valid segment `s`,
    /// `name.child(s)?.parent() == Some(name)`.
    #[must_use]
    pub fn parent(&self) -> Option<Self> {
        self.0
            .rfind(SEPARATOR)
            .map(|idx| Self(self.0[..idx].to_string()))
    }

    /// Append a segment, returning the child name
    ///
    /// # Errors
    /// Same validation as [`UniqueName::from_segments`] for the new segment.
    pub fn child(&self, segment: impl AsRef<str>) -> Result<Self, NameError> {
        let segment = segment.as_ref();
        if segment.is_empty() {
            return Err(NameError::EmptySegment);
        }
        if segment.contains(SEPARATOR) {
            return Err(NameError::SeparatorInSegment(segment.to_string()));
        }
        let mut joined = self.0.clone();
        joined.push(SEPARATOR);
        joined.push_str(segment);
        Ok(Self(joined))
    }

    /// The name as a string slice
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for UniqueName {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for UniqueName {
    type Err = NameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl AsRef<str> for UniqueName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Project name for a user-owned project
///
/// # Errors
/// Propagates segment validation from [`UniqueName::from_segments`].
pub fn project_unique_name(owner: &str, project: &str) -> Result<UniqueName, NameError> {
    UniqueName::from_segments([owner, project])
}

/// Experiment name inside a project
///
/// # Errors
/// Propagates segment validation from [`UniqueName::from_segments`].
pub fn experiment_unique_name(
    owner: &str,
    project: &str,
    id: impl Display,
) -> Result<UniqueName, NameError> {
    let id = id.to_string();
    UniqueName::from_segments([owner, project, id.as_str()])
}

/// Group name inside a project
///
/// # Errors
/// Propagates segment validation from [`UniqueName::from_segments`].
pub fn group_unique_name(
    owner: &str,
    project: &str,
    id: impl Display,
) -> Result<UniqueName, NameError> {
    let id = id.to_string();
    UniqueName::from_segments([owner, project, id.as_str()])
}

/// Job name inside a project (carries the `jobs` resource segment)
///
/// # Errors
/// Propagates segment validation from [`UniqueName::from_segments`].
pub fn job_unique_name(
    owner: &str,
    project: &str,
    id: impl Display,
) -> Result<UniqueName, NameError> {
    let id = id.to_string();
    UniqueName::from_segments([owner, project, "jobs", id.as_str()])
}

/// Build name inside a project (carries the `builds` resource segment)
///
/// # Errors
/// Propagates segment validation from [`UniqueName::from_segments`].
pub fn build_unique_name(
    owner: &str,
    project: &str,
    id: impl Display,
) -> Result<UniqueName, NameError> {
    let id = id.to_string();
    UniqueName::from_segments([owner, project, "builds", id.as_str()])
}

/// Derive the owning experiment's name from an experiment-job name
///
/// Strips the trailing job segment; exact inverse of constructing the job
/// name under the experiment.
///
/// # Errors
/// Returns [`NameError::WrongArity`] when the job name is not a valid
/// experiment-job name.
pub fn owning_experiment(job_name: &UniqueName) -> Result<UniqueName, NameError> {
    let expected = EntityKind::ExperimentJob
        .arity()
        .unwrap_or_default();
    let found = job_name.len();
    if found != expected {
        return Err(NameError::WrongArity {
            name: job_name.to_string(),
            kind: EntityKind::ExperimentJob,
            expected,
            found,
        });
    }
    // Arity checked above, a parent always exists.
    job_name.parent().ok_or(NameError::EmptySegment)
}

/// Derive the owning project's name from any project-scoped entity name
///
/// # Errors
/// Returns [`NameError::WrongArity`] when the name has fewer than two
/// segments.
pub fn owning_project(name: &UniqueName) -> Result<UniqueName, NameError> {
    let segments = name.segments();
    if segments.len() < 2 {
        return Err(NameError::WrongArity {
            name: name.to_string(),
            kind: EntityKind::Project,
            expected: 2,
            found: segments.len(),
        });
    }
    UniqueName::from_segments(&segments[..2])
}

/// Errors related to unique names
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NameError {
    /// Empty name or empty segment
    #[error("unique name contains an empty segment")]
    EmptySegment,

    /// Separator inside a single segment
    #[error("segment '{0}' contains the separator")]
    SeparatorInSegment(String),

    /// Segment count does not match the entity kind
    #[error("malformed name '{name}': expected {expected} segments for {kind}, found {found}")]
    WrongArity {
        /// The offending name
        name: String,
        /// Kind the name was parsed for
        kind: EntityKind,
        /// Expected segment count
        expected: usize,
        /// Actual segment count
        found: usize,
    },

    /// Kind is keyed by numeric id, not unique name
    #[error("entity kind {0} is not keyed by unique name")]
    NotNameKeyed(EntityKind),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_from_segments() {
        let name = UniqueName::from_segments(["alice", "proj1", "builds", "1"]).unwrap();
        assert_eq!(name.as_str(), "alice.proj1.builds.1");
        assert_eq!(name.len(), 4);
    }

    #[test]
    fn name_from_segments_rejects_empty() {
        assert_eq!(
            UniqueName::from_segments(["alice", ""]),
            Err(NameError::EmptySegment)
        );
        assert_eq!(
            UniqueName::from_segments(Vec::<&str>::new()),
            Err(NameError::EmptySegment)
        );
    }

    #[test]
    fn name_from_segments_rejects_separator() {
        let result = UniqueName::from_segments(["alice", "a.b"]);
        assert!(matches!(result, Err(NameError::SeparatorInSegment(_))));
    }

    #[test]
    fn name_parse_round_trip() {
        let name: UniqueName = "alice.proj1.jobs.3".parse().unwrap();
        assert_eq!(name.segments(), vec!["alice", "proj1", "jobs", "3"]);
        assert_eq!(
            UniqueName::from_segments(name.segments()).unwrap(),
            name
        );
    }

    #[test]
    fn name_parse_empty_segment() {
        let result: Result<UniqueName, _> = "alice..proj1".parse();
        assert_eq!(result, Err(NameError::EmptySegment));
    }

    #[test]
    fn name_parse_for_checks_arity() {
        assert!(UniqueName::parse_for(EntityKind::Build, "alice.proj1.builds.1").is_ok());

        let result = UniqueName::parse_for(EntityKind::Build, "alice.proj1.1");
        assert!(matches!(
            result,
            Err(NameError::WrongArity {
                expected: 4,
                found: 3,
                ..
            })
        ));
    }

    #[test]
    fn name_parse_for_status_is_rejected() {
        let result = UniqueName::parse_for(EntityKind::Status, "alice.proj1");
        assert_eq!(result, Err(NameError::NotNameKeyed(EntityKind::Status)));
    }

    #[test]
    fn name_parent_and_child_invert() {
        let experiment = UniqueName::parse("alice.proj1.4").unwrap();
        let job = experiment.child("7").unwrap();
        assert_eq!(job.as_str(), "alice.proj1.4.7");
        assert_eq!(job.parent(), Some(experiment));
    }

    #[test]
    fn name_first_and_last() {
        let name = UniqueName::parse("alice.proj1.builds.1").unwrap();
        assert_eq!(name.first(), "alice");
        assert_eq!(name.last(), "1");
    }

    #[test]
    fn project_parent_is_owner_segment() {
        let project = project_unique_name("alice", "proj1").unwrap();
        assert_eq!(project.parent().unwrap().as_str(), "alice");
    }

    #[test]
    fn builders_match_arities() {
        let project = project_unique_name("alice", "proj1").unwrap();
        let experiment = experiment_unique_name("alice", "proj1", 4).unwrap();
        let group = group_unique_name("alice", "proj1", 2).unwrap();
        let job = job_unique_name("alice", "proj1", 3).unwrap();
        let build = build_unique_name("alice", "proj1", 1).unwrap();

        assert_eq!(project.len(), EntityKind::Project.arity().unwrap());
        assert_eq!(experiment.len(), EntityKind::Experiment.arity().unwrap());
        assert_eq!(group.len(), EntityKind::Group.arity().unwrap());
        assert_eq!(job.len(), EntityKind::Job.arity().unwrap());
        assert_eq!(build.len(), EntityKind::Build.arity().unwrap());
        assert_eq!(job.as_str(), "alice.proj1.jobs.3");
        assert_eq!(build.as_str(), "alice.proj1.builds.1");
    }

    #[test]
    fn owning_experiment_strips_job_segment() {
        let job = UniqueName::parse("alice.proj1.4.7").unwrap();
        let experiment = owning_experiment(&job).unwrap();
        assert_eq!(experiment.as_str(), "alice.proj1.4");

        // Recovered parent re-derives the child exactly.
        assert_eq!(experiment.child("7").unwrap(), job);
    }

    #[test]
    fn owning_experiment_rejects_wrong_arity() {
        let experiment = UniqueName::parse("alice.proj1.4").unwrap();
        assert!(matches!(
            owning_experiment(&experiment),
            Err(NameError::WrongArity { .. })
        ));
    }

    #[test]
    fn owning_project_takes_leading_segments() {
        let build = UniqueName::parse("alice.proj1.builds.1").unwrap();
        assert_eq!(owning_project(&build).unwrap().as_str(), "alice.proj1");
    }

    #[test]
    fn name_serde_round_trips_as_string() {
        let name = UniqueName::parse("alice.proj1").unwrap();
        let json = serde_json::to_string(&name).unwrap();
        assert_eq!(json, "\"alice.proj1\"");
        let back: UniqueName = serde_json::from_str(&json).unwrap();
        assert_eq!(back, name);
    }
}
