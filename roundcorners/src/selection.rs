use crate::error::RoundError;
use crate::geometry::limits;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One selected corner: `pathId:subpathIndex:nodeIndex`.
///
/// Orders by path id, then subpath, then node index, numerically.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct SelectionKey {
    pub path_id: String,
    pub subpath: usize,
    pub node: usize,
}

impl SelectionKey {
    pub fn new(path_id: impl Into<String>, subpath: usize, node: usize) -> Self {
        Self { path_id: path_id.into(), subpath, node }
    }
}

impl FromStr for SelectionKey {
    type Err = RoundError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bad = || RoundError::InvalidSelection(s.to_string());
        // Ids may contain ':', the two indices never do.
        let mut it = s.trim().rsplitn(3, ':');
        let node = it.next().and_then(|v| v.parse().ok()).ok_or_else(bad)?;
        let subpath = it.next().and_then(|v| v.parse().ok()).ok_or_else(bad)?;
        let path_id = it.next().filter(|id| !id.is_empty()).ok_or_else(bad)?;
        Ok(SelectionKey { path_id: path_id.to_string(), subpath, node })
    }
}

impl fmt::Display for SelectionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.path_id, self.subpath, self.node)
    }
}

/// Parse every key, failing on the first malformed one.
pub fn parse_keys<S: AsRef<str>>(keys: &[S]) -> Result<Vec<SelectionKey>, RoundError> {
    if keys.len() > limits::MAX_SELECTION {
        return Err(RoundError::LimitExceeded("selection"));
    }
    keys.iter().map(|k| k.as_ref().parse()).collect()
}

/// Sort ascending and drop duplicates, the order the batch driver requires.
pub fn normalize(keys: &[SelectionKey]) -> Vec<SelectionKey> {
    let mut v = keys.to_vec();
    v.sort();
    v.dedup();
    v
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_ids_with_colons() {
        let k: SelectionKey = "svg:path12:1:7".parse().unwrap();
        assert_eq!(k, SelectionKey::new("svg:path12", 1, 7));
        assert_eq!(k.to_string(), "svg:path12:1:7");
    }

    #[test]
    fn rejects_malformed() {
        for s in ["", "p", "p:1", "p:x:1", ":0:1", "p:0:-1"] {
            assert!(s.parse::<SelectionKey>().is_err(), "{:?} should fail", s);
        }
    }

    #[test]
    fn numeric_order_not_lexicographic() {
        let keys = parse_keys(&["p:0:10", "p:0:2", "p:0:2", "p:1:0"]).unwrap();
        let sorted = normalize(&keys);
        let nodes: Vec<_> = sorted.iter().map(|k| (k.subpath, k.node)).collect();
        assert_eq!(nodes, vec![(0, 2), (0, 10), (1, 0)]);
    }

    #[test]
    fn oversized_selection_is_refused() {
        let keys = vec!["p:0:1"; limits::MAX_SELECTION + 1];
        assert!(matches!(parse_keys(&keys), Err(RoundError::LimitExceeded("selection"))));
    }
}
