//! Round many corners of one or more paths in a single pass.
//!
//! Every fillet adds nodes to its subpath, shifting the indices of the
//! nodes after it. Selections therefore run in ascending order per
//! subpath and each raw index is shifted by what earlier corners in the
//! same subpath inserted.

use super::outcome::{Outcome, Rejection};
use super::splice::{round_corner, CornerParams};
use crate::config::RoundOptions;
use crate::diagnostics::Diagnostics;
use crate::error::RoundError;
use crate::geometry::limits;
use crate::model::Path;
use crate::selection::{normalize, SelectionKey};
use crate::store::PathStore;
use std::collections::{BTreeMap, HashMap};

#[derive(Clone, Copy, Debug, Default)]
struct SubpathOffset {
    inserted: usize,
    last_raw: usize,
}

/// Nodes inserted so far, per (path id, subpath).
#[derive(Clone, Debug, Default)]
pub struct OffsetTable {
    entries: HashMap<(String, usize), SubpathOffset>,
}

impl OffsetTable {
    pub fn offset(&self, path_id: &str, subpath: usize) -> usize {
        self.entries
            .get(&(path_id.to_string(), subpath))
            .map_or(0, |e| e.inserted)
    }

    /// Shifted index for `key`, or `OutOfOrder` when a corner at or after
    /// it in the same subpath was already processed.
    pub fn resolve(&self, key: &SelectionKey) -> Result<usize, RoundError> {
        match self.entries.get(&(key.path_id.clone(), key.subpath)) {
            Some(e) if key.node <= e.last_raw => Err(RoundError::OutOfOrder {
                subpath: key.subpath,
                index: key.node,
                last: e.last_raw,
            }),
            Some(e) => Ok(key.node + e.inserted),
            None => Ok(key.node),
        }
    }

    pub fn advance(&mut self, key: &SelectionKey, inserted: usize) {
        let e = self.entries.entry((key.path_id.clone(), key.subpath)).or_default();
        e.inserted += inserted;
        e.last_raw = key.node;
    }
}

/// State of one rounding batch: shared parameters, the offset table and
/// the counters reported at the end.
pub struct Batch {
    params: CornerParams,
    offsets: OffsetTable,
    diagnostics: Diagnostics,
}

impl Batch {
    /// `selected` is the total number of corners in the batch; a batch of
    /// one may trim almost the whole of the shorter side.
    pub fn new(opts: &RoundOptions, selected: usize) -> Result<Self, RoundError> {
        if selected == 0 {
            return Err(RoundError::NoSelection);
        }
        if selected > limits::MAX_SELECTION {
            return Err(RoundError::LimitExceeded("selection"));
        }
        let radius = opts.validated_radius()?;
        Ok(Self {
            params: CornerParams {
                radius,
                method: opts.method,
                trim_factor: opts.trim_factor_for(selected),
            },
            offsets: OffsetTable::default(),
            diagnostics: Diagnostics::default(),
        })
    }

    pub fn params(&self) -> &CornerParams {
        &self.params
    }

    pub fn offsets(&self) -> &OffsetTable {
        &self.offsets
    }

    pub fn diagnostics(&self) -> &Diagnostics {
        &self.diagnostics
    }

    /// Round one selected corner of `path` (the path named by `key.path_id`).
    pub fn round(&mut self, path: &mut Path, key: &SelectionKey) -> Result<Outcome, RoundError> {
        let index = self.offsets.resolve(key)?;
        let outcome = match path.subpaths.get_mut(key.subpath) {
            Some(sp) => round_corner(sp, index, &self.params),
            None => Outcome::Rejected(Rejection::Boundary),
        };
        if let Outcome::Rejected(r) = outcome {
            log::debug!("{} (index {}) skipped: {:?}", key, index, r);
        }
        self.offsets.advance(key, outcome.inserted());
        self.diagnostics.record(&outcome);
        Ok(outcome)
    }

    pub fn finish(self) -> Diagnostics {
        self.diagnostics.report();
        self.diagnostics
    }
}

/// Round the selected corners of a single path. Path ids in `keys` are
/// ignored except for grouping their offsets.
pub fn round_path(path: &mut Path, keys: &[SelectionKey], opts: &RoundOptions) -> Result<Diagnostics, RoundError> {
    let keys = normalize(keys);
    let mut batch = Batch::new(opts, keys.len())?;
    for key in &keys {
        batch.round(path, key)?;
    }
    Ok(batch.finish())
}

/// Round the selected corners across every path they name, reading and
/// writing paths through `store`.
pub fn round_corners<S: PathStore + ?Sized>(
    store: &mut S,
    keys: &[SelectionKey],
    opts: &RoundOptions,
) -> Result<Diagnostics, RoundError> {
    let keys = normalize(keys);
    let mut batch = Batch::new(opts, keys.len())?;

    let mut by_path: BTreeMap<&str, Vec<&SelectionKey>> = BTreeMap::new();
    for key in &keys {
        by_path.entry(key.path_id.as_str()).or_default().push(key);
    }

    for (id, group) in by_path {
        let mut handle = store.lookup(id)?;
        handle.apply_pending_transform();
        let mut path = handle.to_subpaths()?;
        for key in group {
            batch.round(&mut path, key)?;
        }
        store.commit(handle, &path)?;
    }
    Ok(batch.finish())
}
