use serde::{Deserialize, Deserializer, Serialize};

use crate::error::ArrangeError;

/// How many views to close after sorting.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(from = "i64", into = "i64")]
pub enum CloseSpec {
    /// An absolute number of views.
    Count(u64),
    /// A share of all open views, written as a negative integer by users.
    Percent(u64),
}

impl From<i64> for CloseSpec {
    fn from(value: i64) -> Self {
        if value < 0 {
            Self::Percent(value.unsigned_abs())
        } else {
            Self::Count(value as u64)
        }
    }
}

impl From<CloseSpec> for i64 {
    fn from(spec: CloseSpec) -> Self {
        match spec {
            CloseSpec::Count(n) => i64::try_from(n).unwrap_or(i64::MAX),
            CloseSpec::Percent(p) => i64::try_from(p).map(|p| -p).unwrap_or(i64::MIN),
        }
    }
}

/// Arguments of the sort command, as passed by the editor.
///
/// `{"sort": true, "close": -50}` sorts, then closes half of the open views.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SortTabsArgs {
    #[serde(default = "default_sort")]
    pub sort: bool,
    #[serde(default, deserialize_with = "deserialize_close")]
    pub close: Option<CloseSpec>,
}

fn default_sort() -> bool {
    true
}

impl Default for SortTabsArgs {
    fn default() -> Self {
        Self {
            sort: default_sort(),
            close: None,
        }
    }
}

impl SortTabsArgs {
    pub fn from_json(json: &str) -> Result<Self, ArrangeError> {
        let args = serde_json::from_str(json)?;
        log::debug!("[SortTabs] Parsed command args: {:?}", args);
        Ok(args)
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawClose {
    Flag(bool),
    Amount(i64),
}

// `false` means "do not close", `true` behaves like the integer 1.
fn deserialize_close<'de, D>(deserializer: D) -> Result<Option<CloseSpec>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<RawClose>::deserialize(deserializer)?;
    Ok(match raw {
        None | Some(RawClose::Flag(false)) => None,
        Some(RawClose::Flag(true)) => Some(CloseSpec::Count(1)),
        Some(RawClose::Amount(n)) => Some(CloseSpec::from(n)),
    })
}
