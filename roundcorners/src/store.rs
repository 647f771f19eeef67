//! Where paths come from and where rounded paths go back to.

use crate::error::RoundError;
use crate::geometry::limits;
use crate::model::Path;
use crate::svg;
use crate::transform::Affine;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;

/// A path checked out of a store: its id, its SVG path data and the
/// transform still attached to it.
#[derive(Clone, Debug)]
pub struct PathHandle {
    id: String,
    data: String,
    pending: Option<Affine>,
    applied: Option<Affine>,
}

impl PathHandle {
    pub fn new(id: impl Into<String>, data: impl Into<String>, transform: Option<Affine>) -> Self {
        Self {
            id: id.into(),
            data: data.into(),
            pending: transform.filter(|t| !t.is_identity()),
            applied: None,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    /// Bake the element's own transform into the coordinates, so the radius
    /// is measured in the space the path is drawn in.
    pub fn apply_pending_transform(&mut self) {
        if let Some(t) = self.pending.take() {
            self.applied = Some(t);
        }
    }

    pub fn transform_applied(&self) -> bool {
        self.applied.is_some()
    }

    pub fn to_subpaths(&self) -> Result<Path, RoundError> {
        let mut path = svg::parse_path(&self.data)?;
        if let Some(t) = self.applied {
            path.map_points(|p| t.apply(p));
        }
        Ok(path)
    }
}

/// Host document access used by [`crate::round_corners`].
pub trait PathStore {
    fn lookup(&mut self, id: &str) -> Result<PathHandle, RoundError>;

    /// Write `path` back to the element `handle` was checked out from.
    /// A transform baked in by the handle is removed from the element.
    fn commit(&mut self, handle: PathHandle, path: &Path) -> Result<(), RoundError>;
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PathElement {
    pub id: String,
    pub d: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transform: Option<String>,
}

/// In-memory document of path elements, keyed by id, in insertion order.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    elements: Vec<PathElement>,
    index: HashMap<String, usize>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Insert or replace the path data of `id`. The data is validated first.
    pub fn insert(&mut self, id: &str, d: &str) -> Result<(), RoundError> {
        svg::parse_path(d)?;
        match self.index.get(id) {
            Some(&i) => self.elements[i].d = d.to_string(),
            None => {
                if self.elements.len() >= limits::MAX_PATHS {
                    return Err(RoundError::LimitExceeded("paths"));
                }
                self.index.insert(id.to_string(), self.elements.len());
                self.elements.push(PathElement { id: id.to_string(), d: d.to_string(), transform: None });
            }
        }
        Ok(())
    }

    /// Attach a transform to `id`; an empty string removes it.
    pub fn set_transform(&mut self, id: &str, transform: &str) -> Result<(), RoundError> {
        Affine::parse(transform)?;
        let el = self.get_mut(id)?;
        el.transform = if transform.trim().is_empty() { None } else { Some(transform.to_string()) };
        Ok(())
    }

    pub fn get(&self, id: &str) -> Option<&PathElement> {
        self.index.get(id).map(|&i| &self.elements[i])
    }

    fn get_mut(&mut self, id: &str) -> Result<&mut PathElement, RoundError> {
        match self.index.get(id) {
            Some(&i) => Ok(&mut self.elements[i]),
            None => Err(RoundError::PathNotFound(id.to_string())),
        }
    }

    pub fn elements(&self) -> &[PathElement] {
        &self.elements
    }

    /// `{"paths": [{"id", "d", "transform"?}, ...]}`
    pub fn from_json_value(v: Value) -> Result<Self, RoundError> {
        #[derive(Deserialize)]
        struct Doc {
            paths: Vec<PathElement>,
        }
        let doc: Doc = serde_json::from_value(v)?;
        if doc.paths.len() > limits::MAX_PATHS {
            return Err(RoundError::LimitExceeded("paths"));
        }
        let mut store = MemoryStore::new();
        for el in doc.paths {
            store.insert(&el.id, &el.d)?;
            if let Some(t) = &el.transform {
                store.set_transform(&el.id, t)?;
            }
        }
        Ok(store)
    }

    pub fn to_json_value(&self) -> Value {
        serde_json::json!({ "paths": self.elements })
    }
}

impl PathStore for MemoryStore {
    fn lookup(&mut self, id: &str) -> Result<PathHandle, RoundError> {
        let el = self.get_mut(id)?;
        let transform = el.transform.as_deref().map(Affine::parse).transpose()?;
        Ok(PathHandle::new(id, el.d.clone(), transform))
    }

    fn commit(&mut self, handle: PathHandle, path: &Path) -> Result<(), RoundError> {
        if !path.is_finite() {
            log::error!("path {} has non-finite coordinates after rounding", handle.id());
            return Err(RoundError::NonFinite("rounded path"));
        }
        let el = self.get_mut(handle.id())?;
        el.d = svg::to_path_data(path);
        if handle.transform_applied() {
            el.transform = None;
        }
        Ok(())
    }
}
