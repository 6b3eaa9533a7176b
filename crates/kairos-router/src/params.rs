//! Captured path parameter storage.

use smallvec::SmallVec;

/// Parameters stored inline before spilling to the heap. No registered
/// route captures more than three.
const INLINE_PARAMS: usize = 4;

/// Path parameters captured by a route match, as (name, value) pairs.
///
/// Small-vector backed so the common one-to-three capture case never
/// allocates. Lookup is a linear scan, which beats hashing at these sizes.
///
/// # Example
///
/// ```rust
/// use kairos_router::Params;
///
/// let mut params = Params::new();
/// params.insert("continent", "Europe");
/// params.insert("city", "Moscow");
///
/// assert_eq!(params.get("city"), Some("Moscow"));
/// assert_eq!(params.get("country"), None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Params {
    inner: SmallVec<[(String, String); INLINE_PARAMS]>,
}

impl Params {
    /// Creates an empty parameter set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a captured parameter.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.inner.push((name.into(), value.into()));
    }

    /// Returns the value captured under `name`.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.inner
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    /// Returns true when nothing was captured.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Returns the number of captured parameters.
    #[must_use]
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// Iterates over the captured (name, value) pairs in capture order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.inner.iter().map(|(n, v)| (n.as_str(), v.as_str()))
    }
}

impl FromIterator<(String, String)> for Params {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self {
            inner: iter.into_iter().collect(),
        }
    }
}
