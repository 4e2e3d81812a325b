use serde::{Deserialize, Serialize};

/// Defines the coordinate axes of the lattice
///
/// Note: The fixed numbering scheme is the index into the coordinates array.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, PartialOrd, Ord, Deserialize, Serialize)]
pub enum Axis {
    /// First axis
    X = 0,

    /// Second axis
    Y = 1,

    /// Third axis
    Z = 2,
}

impl Axis {
    /// Returns the index of the axis into a coordinates array
    pub fn index(&self) -> usize {
        *self as usize
    }
}

/// Defines the side of a coordinate threshold selected by a boundary rule
#[derive(Clone, Copy, Debug, Eq, PartialEq, Deserialize, Serialize)]
pub enum Side {
    /// Selects coordinates ≤ threshold
    Below,

    /// Selects coordinates ≥ threshold
    Above,
}

/// Defines region labels attached to pores
///
/// A pore holds a set of labels, thus it may be `Internal` and `Inlet` simultaneously.
#[derive(Clone, Debug, Eq, Hash, PartialEq, PartialOrd, Ord, Deserialize, Serialize)]
pub enum Label {
    /// Pore inside the domain (every lattice pore)
    Internal,

    /// Pore on one of the faces of the lattice
    External,

    /// Pore where the invading fluid enters
    Inlet,

    /// Pore where the defending fluid may escape
    Outlet,

    /// Caller-defined region
    Custom(String),
}

impl Label {
    /// Returns the name of the label
    pub fn name(&self) -> String {
        match self {
            Label::Internal => "internal".to_string(),
            Label::External => "external".to_string(),
            Label::Inlet => "inlet".to_string(),
            Label::Outlet => "outlet".to_string(),
            Label::Custom(name) => name.clone(),
        }
    }
}

/// Defines a rule that labels the pores on one side of a coordinate threshold
///
/// For example, with a lattice spacing of 1e-4, the rule
/// `BoundaryRule::new(Axis::X, Side::Below, 5e-5, Label::Inlet)` labels the first layer of pores.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct BoundaryRule {
    /// Axis of the coordinate being compared
    pub axis: Axis,

    /// Side of the threshold to select
    pub side: Side,

    /// Coordinate threshold
    pub threshold: f64,

    /// Label given to the selected pores
    pub label: Label,
}

impl BoundaryRule {
    /// Allocates a new instance
    pub fn new(axis: Axis, side: Side, threshold: f64, label: Label) -> Self {
        BoundaryRule {
            axis,
            side,
            threshold,
            label,
        }
    }

    /// Indicates whether the rule selects the given coordinates
    pub fn selects(&self, coords: &[f64; 3]) -> bool {
        let x = coords[self.axis.index()];
        match self.side {
            Side::Below => x <= self.threshold,
            Side::Above => x >= self.threshold,
        }
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::{Axis, BoundaryRule, Label, Side};
    use std::collections::BTreeSet;

    #[test]
    fn axis_and_label_derives_work() {
        let x = Axis::X;
        let x_clone = x.clone();
        assert_eq!(format!("{:?}", x), "X");
        assert_eq!(x, x_clone);
        assert!(Axis::X < Axis::Z);
        assert_eq!(Axis::Y.index(), 1);

        let mut set = BTreeSet::new();
        set.insert(Label::Inlet);
        set.insert(Label::Internal);
        set.insert(Label::Inlet);
        assert_eq!(set.len(), 2);
        assert_eq!(format!("{:?}", Label::Custom("left".to_string())), "Custom(\"left\")");
    }

    #[test]
    fn label_names_work() {
        assert_eq!(Label::Internal.name(), "internal");
        assert_eq!(Label::External.name(), "external");
        assert_eq!(Label::Inlet.name(), "inlet");
        assert_eq!(Label::Outlet.name(), "outlet");
        assert_eq!(Label::Custom("front".to_string()).name(), "front");
    }

    #[test]
    fn boundary_rule_selects_works() {
        let rule = BoundaryRule::new(Axis::X, Side::Below, 5e-5, Label::Inlet);
        assert!(rule.selects(&[5e-5, 1.0, 1.0]));
        assert!(!rule.selects(&[1.5e-4, 0.0, 0.0]));

        let rule = BoundaryRule::new(Axis::Z, Side::Above, 2.0, Label::Outlet);
        assert!(rule.selects(&[0.0, 0.0, 2.0]));
        assert!(!rule.selects(&[9.0, 9.0, 1.9]));
    }
}
