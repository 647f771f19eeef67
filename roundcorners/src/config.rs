use crate::error::RoundError;
use crate::geometry::limits;
use crate::model::Method;
use serde::{Deserialize, Serialize};

/// Parameters for one rounding batch.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RoundOptions {
    /// Fillet radius, in path units. The sign is ignored.
    pub radius: f64,
    pub method: Method,
    /// Share of the shorter adjacent handle/segment a corner may trim away.
    /// Half leaves room for rounding the neighbouring corner too.
    pub max_trim_factor: f64,
    /// Replaces `max_trim_factor` when only one corner is selected.
    pub single_corner_trim_factor: f64,
}

impl Default for RoundOptions {
    fn default() -> Self {
        Self {
            radius: 2.0,
            method: Method::Arc,
            max_trim_factor: 0.5,
            single_corner_trim_factor: 0.95,
        }
    }
}

impl RoundOptions {
    pub fn new(radius: f64, method: Method) -> Self {
        Self { radius, method, ..Self::default() }
    }

    /// Read a preset; absent fields keep their defaults.
    pub fn from_json_value(v: serde_json::Value) -> Result<Self, RoundError> {
        let opts: RoundOptions = serde_json::from_value(v)?;
        opts.validated_radius()?;
        Ok(opts)
    }

    /// |radius|, rejecting zero, non-finite and absurd values.
    pub fn validated_radius(&self) -> Result<f64, RoundError> {
        let r = self.radius.abs();
        if limits::in_radius_bounds(r) {
            Ok(r)
        } else {
            Err(RoundError::InvalidRadius(self.radius))
        }
    }

    /// Trim budget factor for a batch of `selected` corners.
    pub fn trim_factor_for(&self, selected: usize) -> f64 {
        if selected == 1 { self.single_corner_trim_factor } else { self.max_trim_factor }
    }
}
