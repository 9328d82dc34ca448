//! Fixture table types.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;
use std::collections::{BTreeMap, HashMap};

/// Canned completion returned for a case
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fixture {
    /// Completion text
    #[serde(default)]
    pub content: String,
}

impl Fixture {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
        }
    }
}

/// Scenario group value - either named cases or the "always empty" sentinel
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScenarioGroup {
    /// Case name to fixture
    Cases(HashMap<String, Fixture>),
    /// Every case of the group completes to an empty string
    Empty,
}

impl ScenarioGroup {
    pub fn case(&self, name: &str) -> Option<&Fixture> {
        match self {
            ScenarioGroup::Cases(cases) => cases.get(name),
            ScenarioGroup::Empty => None,
        }
    }
}

impl Serialize for ScenarioGroup {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            ScenarioGroup::Cases(cases) => {
                // Sorted so serialized tables are stable
                let sorted: BTreeMap<&String, &Fixture> = cases.iter().collect();
                sorted.serialize(serializer)
            }
            ScenarioGroup::Empty => Vec::<Value>::new().serialize(serializer),
        }
    }
}

impl<'de> Deserialize<'de> for ScenarioGroup {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        match value {
            Value::Array(_) => Ok(ScenarioGroup::Empty),
            Value::Object(_) => {
                let cases = HashMap::<String, Fixture>::deserialize(value)
                    .map_err(serde::de::Error::custom)?;
                Ok(ScenarioGroup::Cases(cases))
            }
            _ => Err(serde::de::Error::custom(
                "Scenario group must be either an object of cases or a list",
            )),
        }
    }
}

/// Read-only mapping of scenario group name to its cases.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FixtureTable {
    groups: HashMap<String, ScenarioGroup>,
}

impl FixtureTable {
    pub fn new(groups: HashMap<String, ScenarioGroup>) -> Self {
        Self { groups }
    }

    /// Fixtures served when no fixture file is configured.
    pub fn builtin() -> Self {
        let large_ts = cases(&[
            ("line_1_col_10", "greeting"),
            (
                "line_10_col_0",
                "// Function to calculate sum\nfunction sum(a: number, b: number): number {\n    return a + b;\n}",
            ),
            (
                "line_10_col_5",
                "// Calculate factorial\nfunction factorial(n: number): number {",
            ),
            (
                "line_50_col_20",
                " {\n        console.log('Processing item:', item);\n        results.push(item * 2);\n    }",
            ),
            ("line_50_col_0", ""),
            (
                "line_100_col_15",
                " {\n        if (count > 0) {\n            await processData(data);\n        }\n    }",
            ),
            ("default", "// TODO: complete this\n"),
        ]);

        let fim_render_dedup = cases(&[
            ("empty_first_repeating", "\nfunction greeting(): string {"),
            ("repeats_suffix", "greeting(): string {"),
            (
                "normal_multiline",
                "const result = {\n    value: 42,\n    valid: true\n};",
            ),
            ("whitespace_only", "   \n  \n   "),
            ("trailing_newlines", "console.log('test');\n\n\n"),
        ]);

        let mut groups = HashMap::new();
        groups.insert("empty.ts".to_string(), ScenarioGroup::Empty);
        groups.insert("large.ts".to_string(), large_ts);
        groups.insert("fim_render_dedup".to_string(), fim_render_dedup);
        Self { groups }
    }

    pub fn get(&self, group: &str) -> Option<&ScenarioGroup> {
        self.groups.get(group)
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Group names in sorted order.
    pub fn group_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.groups.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Combine two tables; groups from `other` replace groups with the same name.
    pub fn merge(mut self, other: FixtureTable) -> Self {
        self.groups.extend(other.groups);
        self
    }
}

fn cases(entries: &[(&str, &str)]) -> ScenarioGroup {
    ScenarioGroup::Cases(
        entries
            .iter()
            .map(|(name, content)| (name.to_string(), Fixture::new(*content)))
            .collect(),
    )
}
