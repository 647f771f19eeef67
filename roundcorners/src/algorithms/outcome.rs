/// Why a corner was left untouched.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Rejection {
    /// First node of an open subpath, last node of any subpath, or an index
    /// outside the subpath.
    Boundary,
    /// The path folds back on itself at the corner.
    Degenerate,
    /// A handle, segment or trim budget is too short; carries the offending length.
    TooSmall(f64),
    /// Negative or non-finite trim. Unreachable for valid angles.
    Internal,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FilletShape {
    /// Corner replaced by two nodes; the arc (or bevel) spans at most a quarter turn.
    TwoSegment,
    /// Corner replaced by three nodes, the middle one on the arc midpoint.
    ThreeSegment,
}

impl FilletShape {
    pub fn node_count(&self) -> usize {
        match self {
            FilletShape::TwoSegment => 2,
            FilletShape::ThreeSegment => 3,
        }
    }
}

/// Terminal state of one corner.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Outcome {
    Rounded(FilletShape),
    /// Already a straight join; nothing to round.
    Straight,
    Rejected(Rejection),
}

impl Outcome {
    /// Net nodes added to the subpath.
    pub fn inserted(&self) -> usize {
        match self {
            Outcome::Rounded(shape) => shape.node_count() - 1,
            _ => 0,
        }
    }
}
