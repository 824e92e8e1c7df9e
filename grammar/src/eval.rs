//! Evaluation kinds.
//!
//! Each alternative names how it evaluates with one variant of the enum for
//! its category. The variants carry no data: attribute indices and children
//! are supplied when an instantiated fragment is evaluated.

use crate::Category;

/// `rule` evaluations: grid -> bool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RuleEval {
    /// Every cell matching child 1 also matches child 2.
    Every,
    /// Some cell matches both children.
    Exists,
    /// No cell matches both children.
    NoneIs,
    /// Every non-empty group from child 1 satisfies child 2.
    EveryGroup,
    /// Some row has all three cells matching child 1.
    RowFilled,
    /// Some column has all three cells matching child 1.
    ColumnFilled,
}

/// `noun` evaluations: (grid, cell) -> bool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NounEval {
    /// Occupied with the attribute color.
    Color,
    /// Occupied with the attribute shape.
    Shape,
    /// Occupied and in the attribute row.
    Row,
    /// Occupied and in the attribute column.
    Column,
    /// Empty cell.
    Blank,
}

/// `nounPred` evaluations: (grid, cell) -> bool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NounPredEval {
    Color,
    Shape,
    /// In the attribute row, occupied or not.
    Row,
    /// In the attribute column, occupied or not.
    Column,
    /// Some 4-neighbor matches the nested noun.
    AdjacentTo,
}

/// `group` evaluations: grid -> groups.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GroupEval {
    AllSymbols,
    Rows,
    Columns,
    SameColor,
    SameShape,
    Identical,
    AdjacentPairs,
}

/// `groupPred` evaluations: (grid, group) -> bool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GroupPredEval {
    SameColor,
    DifferentColors,
    SameShape,
    DifferentShapes,
    SameColorOrShape,
    Identical,
    Connected,
}

/// The evaluation kind of an alternative, tagged by category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Eval {
    Rule(RuleEval),
    Noun(NounEval),
    NounPred(NounPredEval),
    Group(GroupEval),
    GroupPred(GroupPredEval),
}

impl Eval {
    /// The category this evaluation belongs to.
    pub fn category(&self) -> Category {
        match self {
            Eval::Rule(_) => Category::Rule,
            Eval::Noun(_) => Category::Noun,
            Eval::NounPred(_) => Category::NounPred,
            Eval::Group(_) => Category::Group,
            Eval::GroupPred(_) => Category::GroupPred,
        }
    }
}

impl From<RuleEval> for Eval {
    fn from(e: RuleEval) -> Self {
        Eval::Rule(e)
    }
}

impl From<NounEval> for Eval {
    fn from(e: NounEval) -> Self {
        Eval::Noun(e)
    }
}

impl From<NounPredEval> for Eval {
    fn from(e: NounPredEval) -> Self {
        Eval::NounPred(e)
    }
}

impl From<GroupEval> for Eval {
    fn from(e: GroupEval) -> Self {
        Eval::Group(e)
    }
}

impl From<GroupPredEval> for Eval {
    fn from(e: GroupPredEval) -> Self {
        Eval::GroupPred(e)
    }
}
