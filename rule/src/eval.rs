//! Fragment evaluation.
//!
//! Dispatches on the fragment's evaluation kind. Children are evaluated
//! against the same grid.

use zendo_core::{
    column_cells, column_of, is_connected, neighbors, row_cells, row_of, Color, Grid, Shape,
    ADJACENT_PAIRS, CELL_COUNT, SIDE,
};
use zendo_grammar::{Category, Eval, GroupEval, GroupPredEval, NounEval, NounPredEval, RuleEval};

use crate::Fragment;

/// The argument a fragment is evaluated with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Argument<'a> {
    /// `rule` and `group` fragments take no argument.
    None,
    /// `noun` and `nounPred` fragments judge one cell.
    Cell(usize),
    /// `groupPred` fragments judge one group of cells.
    Group(&'a [usize]),
}

/// The result of evaluating a fragment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Bool(bool),
    Groups(Vec<Vec<usize>>),
}

impl Outcome {
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Outcome::Bool(b) => Some(*b),
            Outcome::Groups(_) => None,
        }
    }

    pub fn into_groups(self) -> Option<Vec<Vec<usize>>> {
        match self {
            Outcome::Groups(groups) => Some(groups),
            Outcome::Bool(_) => None,
        }
    }
}

impl Fragment {
    /// Evaluate this fragment.
    ///
    /// A fragment without an evaluation kind is always true (a `group` one
    /// yields no groups). A cell fragment given no cell is false; a group
    /// predicate given no group judges the empty group.
    pub fn evaluate(&self, grid: &Grid, argument: Argument<'_>) -> Outcome {
        let Some(eval) = self.eval else {
            return match self.category {
                Category::Group => Outcome::Groups(Vec::new()),
                _ => Outcome::Bool(true),
            };
        };

        match eval {
            Eval::Rule(kind) => Outcome::Bool(self.eval_rule(kind, grid)),
            Eval::Noun(kind) => Outcome::Bool(match argument {
                Argument::Cell(cell) if cell < CELL_COUNT => self.eval_noun(kind, grid, cell),
                _ => false,
            }),
            Eval::NounPred(kind) => Outcome::Bool(match argument {
                Argument::Cell(cell) if cell < CELL_COUNT => self.eval_noun_pred(kind, grid, cell),
                _ => false,
            }),
            Eval::Group(kind) => Outcome::Groups(self.eval_group(kind, grid)),
            Eval::GroupPred(kind) => {
                let group = match argument {
                    Argument::Group(group) => group,
                    _ => &[],
                };
                Outcome::Bool(eval_group_pred(kind, grid, group))
            }
        }
    }

    /// Does the grid satisfy this `rule` fragment?
    pub fn holds(&self, grid: &Grid) -> bool {
        self.evaluate(grid, Argument::None).as_bool().unwrap_or(false)
    }

    /// Does the cell match this `noun` or `nounPred` fragment?
    pub fn matches(&self, grid: &Grid, cell: usize) -> bool {
        self.evaluate(grid, Argument::Cell(cell))
            .as_bool()
            .unwrap_or(false)
    }

    /// The groups produced by this `group` fragment.
    pub fn groups(&self, grid: &Grid) -> Vec<Vec<usize>> {
        self.evaluate(grid, Argument::None)
            .into_groups()
            .unwrap_or_default()
    }

    /// Does the group satisfy this `groupPred` fragment?
    pub fn group_holds(&self, grid: &Grid, group: &[usize]) -> bool {
        self.evaluate(grid, Argument::Group(group))
            .as_bool()
            .unwrap_or(false)
    }

    fn attribute_color(&self) -> Option<Color> {
        Color::from_index(self.attribute)
    }

    fn attribute_shape(&self) -> Option<Shape> {
        Shape::from_index(self.attribute)
    }

    fn eval_rule(&self, kind: RuleEval, grid: &Grid) -> bool {
        match (kind, self.children.as_slice()) {
            (RuleEval::Every, [noun, pred]) => {
                (0..CELL_COUNT).all(|i| !noun.matches(grid, i) || pred.matches(grid, i))
            }
            (RuleEval::Exists, [noun, pred]) => {
                (0..CELL_COUNT).any(|i| noun.matches(grid, i) && pred.matches(grid, i))
            }
            (RuleEval::NoneIs, [noun, pred]) => {
                (0..CELL_COUNT).all(|i| !noun.matches(grid, i) || !pred.matches(grid, i))
            }
            (RuleEval::EveryGroup, [group, pred]) => group
                .groups(grid)
                .iter()
                .all(|g| g.is_empty() || pred.group_holds(grid, g)),
            (RuleEval::RowFilled, [noun]) => {
                (0..SIDE).any(|r| row_cells(r).iter().all(|&i| noun.matches(grid, i)))
            }
            (RuleEval::ColumnFilled, [noun]) => {
                (0..SIDE).any(|c| column_cells(c).iter().all(|&i| noun.matches(grid, i)))
            }
            // children not shaped for the kind
            _ => false,
        }
    }

    fn eval_noun(&self, kind: NounEval, grid: &Grid, cell: usize) -> bool {
        match kind {
            NounEval::Color => self.attribute_color().map_or(false, |c| grid.has_color(cell, c)),
            NounEval::Shape => self.attribute_shape().map_or(false, |s| grid.has_shape(cell, s)),
            NounEval::Row => grid.is_occupied(cell) && row_of(cell) == self.attribute,
            NounEval::Column => grid.is_occupied(cell) && column_of(cell) == self.attribute,
            NounEval::Blank => grid.is_blank(cell),
        }
    }

    fn eval_noun_pred(&self, kind: NounPredEval, grid: &Grid, cell: usize) -> bool {
        match kind {
            NounPredEval::Color => self.attribute_color().map_or(false, |c| grid.has_color(cell, c)),
            NounPredEval::Shape => self.attribute_shape().map_or(false, |s| grid.has_shape(cell, s)),
            NounPredEval::Row => row_of(cell) == self.attribute,
            NounPredEval::Column => column_of(cell) == self.attribute,
            NounPredEval::AdjacentTo => match self.children.first() {
                Some(noun) => neighbors(cell).any(|n| noun.matches(grid, n)),
                None => false,
            },
        }
    }

    fn eval_group(&self, kind: GroupEval, grid: &Grid) -> Vec<Vec<usize>> {
        let occupied = |cells: &[usize]| -> Vec<usize> {
            cells.iter().copied().filter(|&i| grid.is_occupied(i)).collect()
        };

        match kind {
            GroupEval::AllSymbols => vec![grid.occupied().collect()],
            GroupEval::Rows => (0..SIDE).map(|r| occupied(&row_cells(r))).collect(),
            GroupEval::Columns => (0..SIDE).map(|c| occupied(&column_cells(c))).collect(),
            GroupEval::SameColor => Color::ALL
                .iter()
                .map(|&c| grid.occupied().filter(|&i| grid.has_color(i, c)).collect())
                .collect(),
            GroupEval::SameShape => Shape::ALL
                .iter()
                .map(|&s| grid.occupied().filter(|&i| grid.has_shape(i, s)).collect())
                .collect(),
            // group v holds shape v / 3 in color v % 3
            GroupEval::Identical => Shape::ALL
                .iter()
                .flat_map(|&s| Color::ALL.iter().map(move |&c| (s, c)))
                .map(|(s, c)| {
                    grid.occupied()
                        .filter(|&i| grid.has_shape(i, s) && grid.has_color(i, c))
                        .collect()
                })
                .collect(),
            GroupEval::AdjacentPairs => ADJACENT_PAIRS
                .iter()
                .filter(|&&(a, b)| grid.is_occupied(a) && grid.is_occupied(b))
                .map(|&(a, b)| vec![a, b])
                .collect(),
        }
    }
}

fn same_color(grid: &Grid, group: &[usize]) -> bool {
    Color::ALL
        .iter()
        .any(|&c| group.iter().all(|&i| grid.has_color(i, c)))
}

fn same_shape(grid: &Grid, group: &[usize]) -> bool {
    Shape::ALL
        .iter()
        .any(|&s| group.iter().all(|&i| grid.has_shape(i, s)))
}

fn eval_group_pred(kind: GroupPredEval, grid: &Grid, group: &[usize]) -> bool {
    match kind {
        GroupPredEval::SameColor => same_color(grid, group),
        GroupPredEval::DifferentColors => Color::ALL
            .iter()
            .all(|&c| group.iter().filter(|&&i| grid.has_color(i, c)).count() <= 1),
        GroupPredEval::SameShape => same_shape(grid, group),
        GroupPredEval::DifferentShapes => Shape::ALL
            .iter()
            .all(|&s| group.iter().filter(|&&i| grid.has_shape(i, s)).count() <= 1),
        GroupPredEval::SameColorOrShape => same_color(grid, group) || same_shape(grid, group),
        GroupPredEval::Identical => same_color(grid, group) && same_shape(grid, group),
        GroupPredEval::Connected => is_connected(group),
    }
}
