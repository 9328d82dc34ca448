//! Fixture resolution for test identifiers.
//!
//! A test identifier has the form `group::case` (or just `group`). Resolution
//! never fails: anything that cannot be matched completes to an empty string.

use crate::types::fixture::{FixtureTable, ScenarioGroup};

/// Separator between group and case in a test identifier
pub const CASE_SEPARATOR: &str = "::";

/// Case used when the identifier names no case
pub const DEFAULT_CASE: &str = "default";

/// Parsed test identifier in format `group::case`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TestKey<'a> {
    pub file_key: &'a str,
    pub case_key: &'a str,
}

impl<'a> TestKey<'a> {
    /// Split on the first separator; the remainder is the case key.
    pub fn parse(test_id: &'a str) -> Self {
        match test_id.split_once(CASE_SEPARATOR) {
            Some((file_key, case_key)) => Self { file_key, case_key },
            None => Self {
                file_key: test_id,
                case_key: DEFAULT_CASE,
            },
        }
    }
}

/// Where resolved content came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResolutionSource {
    /// Case keyed by the whole test identifier
    ExactId,
    /// Case keyed by the part after the separator
    CaseKey,
    /// The group's `default` case
    GroupDefault,
    /// Group is the empty sentinel
    EmptyGroup,
    /// No group with that name
    UnknownGroup,
    /// Group exists but has neither the case nor a default
    MissingCase,
}

impl ResolutionSource {
    /// Whether the content came from a fixture entry.
    pub fn is_hit(&self) -> bool {
        matches!(
            self,
            ResolutionSource::ExactId | ResolutionSource::CaseKey | ResolutionSource::GroupDefault
        )
    }
}

/// Resolved completion text and how it was found.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resolution<'a> {
    pub content: &'a str,
    pub source: ResolutionSource,
}

impl<'a> Resolution<'a> {
    fn empty(source: ResolutionSource) -> Self {
        Self {
            content: "",
            source,
        }
    }
}

/// Resolve a test identifier against the fixture table.
///
/// Lookup order inside a group: whole identifier, case key, `default`.
pub fn resolve<'a>(fixtures: &'a FixtureTable, test_id: &str) -> Resolution<'a> {
    let key = TestKey::parse(test_id);

    let cases = match fixtures.get(key.file_key) {
        None => return Resolution::empty(ResolutionSource::UnknownGroup),
        Some(ScenarioGroup::Empty) => return Resolution::empty(ResolutionSource::EmptyGroup),
        Some(group) => group,
    };

    let candidates = [
        (test_id, ResolutionSource::ExactId),
        (key.case_key, ResolutionSource::CaseKey),
        (DEFAULT_CASE, ResolutionSource::GroupDefault),
    ];

    candidates
        .into_iter()
        .find_map(|(name, source)| {
            cases.case(name).map(|fixture| Resolution {
                content: fixture.content.as_str(),
                source,
            })
        })
        .unwrap_or_else(|| Resolution::empty(ResolutionSource::MissingCase))
}

/// Resolve a test identifier to its completion text.
pub fn resolve_content<'a>(fixtures: &'a FixtureTable, test_id: &str) -> &'a str {
    resolve(fixtures, test_id).content
}
