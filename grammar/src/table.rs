//! The grammar table.

use crate::{
    Alternative, Category, GrammarError, GrammarResult, GroupEval, GroupPredEval, NounEval,
    NounPredEval, RuleEval, Tag,
};

pub const COLOR_CHOICES: &[&str] = &["red", "yellow", "blue"];
pub const SHAPE_CHOICES: &[&str] = &["circle", "triangle", "square"];
pub const ROW_CHOICES: &[&str] = &["top", "middle", "bottom"];
pub const COLUMN_CHOICES: &[&str] = &["left", "middle", "right"];

/// Ordered alternatives for every fragment category.
#[derive(Debug, Clone)]
pub struct Grammar {
    tables: [Vec<Alternative>; 5],
}

impl Grammar {
    /// A grammar with no alternatives.
    pub fn empty() -> Self {
        Self {
            tables: Default::default(),
        }
    }

    /// Append an alternative to a category.
    pub fn with(mut self, category: Category, alternative: Alternative) -> Self {
        self.tables[category.index()].push(alternative);
        self
    }

    /// Alternatives of a category, in table order.
    pub fn alternatives(&self, category: Category) -> &[Alternative] {
        &self.tables[category.index()]
    }

    /// Look up an alternative by position.
    pub fn get(&self, category: Category, index: usize) -> Option<&Alternative> {
        self.tables[category.index()].get(index)
    }

    /// Check that every child slot names a non-empty category and every
    /// alternative evaluates as the category it is listed under.
    pub fn validate(&self) -> GrammarResult<()> {
        for category in Category::ALL {
            for alt in self.alternatives(category) {
                if let Some(eval) = alt.eval {
                    if eval.category() != category {
                        return Err(GrammarError::category_mismatch(
                            alt.name,
                            category,
                            eval.category(),
                        ));
                    }
                }

                for &slot in alt.child_slots {
                    if self.alternatives(slot).is_empty() {
                        return Err(GrammarError::empty_category(
                            slot,
                            format!("{}/{}", category, alt.name),
                        ));
                    }
                }
            }
        }

        if self.alternatives(Category::Rule).is_empty() {
            return Err(GrammarError::empty_category(Category::Rule, "the root"));
        }

        Ok(())
    }

    /// The hand-authored Zendo grammar.
    pub fn standard() -> Self {
        use Category::*;

        Self::empty()
            // ==================== rule ====================
            .with(
                Rule,
                Alternative::new("every", RuleEval::Every)
                    .with_children(&[Noun, NounPred])
                    .with_singular("Every %1 is %2")
                    .with_weight(7),
            )
            .with(
                Rule,
                Alternative::new("exists", RuleEval::Exists)
                    .with_children(&[Noun, NounPred])
                    .with_singular("There is a %1 that is %2")
                    .with_weight(7),
            )
            .with(
                Rule,
                Alternative::new("none", RuleEval::NoneIs)
                    .with_children(&[Noun, NounPred])
                    .with_singular("No %1 is %2")
                    .with_weight(7),
            )
            .with(
                Rule,
                Alternative::new("every_group", RuleEval::EveryGroup)
                    .with_children(&[Group, GroupPred])
                    .with_singular("%1 %2")
                    .with_weight(20),
            )
            .with(
                Rule,
                Alternative::new("row_filled", RuleEval::RowFilled)
                    .with_children(&[Noun])
                    .with_singular("There is a row filled with $1")
                    .with_tags(&[Tag::Position])
                    .with_weight(7),
            )
            .with(
                Rule,
                Alternative::new("column_filled", RuleEval::ColumnFilled)
                    .with_children(&[Noun])
                    .with_singular("There is a column filled with $1")
                    .with_tags(&[Tag::Position])
                    .with_weight(7),
            )
            // ==================== noun ====================
            .with(
                Noun,
                Alternative::new("color", NounEval::Color)
                    .with_attributes(COLOR_CHOICES)
                    .with_singular("@ symbol")
                    .with_plural("@ symbols")
                    .with_tags(&[Tag::Color])
                    .with_weight(20),
            )
            .with(
                Noun,
                Alternative::new("shape", NounEval::Shape)
                    .with_attributes(SHAPE_CHOICES)
                    .with_singular("@")
                    .with_plural("@s")
                    .with_tags(&[Tag::Shape])
                    .with_weight(20),
            )
            .with(
                Noun,
                Alternative::new("row", NounEval::Row)
                    .with_attributes(ROW_CHOICES)
                    .with_singular("symbol in the @ row")
                    .with_plural("symbols in the @ row")
                    .with_tags(&[Tag::Position])
                    .with_weight(20),
            )
            .with(
                Noun,
                Alternative::new("column", NounEval::Column)
                    .with_attributes(COLUMN_CHOICES)
                    .with_singular("symbol in the @ column")
                    .with_plural("symbols in the @ column")
                    .with_tags(&[Tag::Position])
                    .with_weight(20),
            )
            .with(
                Noun,
                Alternative::new("blank", NounEval::Blank)
                    .with_singular("blank cell")
                    .with_plural("blank cells")
                    .with_tags(&[Tag::Shape, Tag::Color])
                    .with_weight(10),
            )
            // ==================== nounPred ====================
            .with(
                NounPred,
                Alternative::new("color", NounPredEval::Color)
                    .with_attributes(COLOR_CHOICES)
                    .with_singular("@")
                    .with_tags(&[Tag::Color])
                    .with_weight(10),
            )
            .with(
                NounPred,
                Alternative::new("shape", NounPredEval::Shape)
                    .with_attributes(SHAPE_CHOICES)
                    .with_singular("a @")
                    .with_plural("@s")
                    .with_tags(&[Tag::Shape])
                    .with_weight(10),
            )
            .with(
                NounPred,
                Alternative::new("row", NounPredEval::Row)
                    .with_attributes(ROW_CHOICES)
                    .with_singular("in the @ row")
                    .with_tags(&[Tag::Position])
                    .with_weight(10),
            )
            .with(
                NounPred,
                Alternative::new("column", NounPredEval::Column)
                    .with_attributes(COLUMN_CHOICES)
                    .with_singular("in the @ column")
                    .with_tags(&[Tag::Position])
                    .with_weight(10),
            )
            .with(
                NounPred,
                Alternative::new("adjacent", NounPredEval::AdjacentTo)
                    .with_children(&[Noun])
                    .with_singular("adjacent to a %1")
                    .with_tags(&[Tag::Position])
                    .with_independent_children()
                    .with_weight(15),
            )
            // ==================== group ====================
            .with(
                Group,
                Alternative::new("all", GroupEval::AllSymbols)
                    .with_singular("All symbols")
                    .with_weight(20),
            )
            .with(
                Group,
                Alternative::new("rows", GroupEval::Rows)
                    .with_singular("Symbols in the same row")
                    .with_tags(&[Tag::Position])
                    .with_weight(10),
            )
            .with(
                Group,
                Alternative::new("columns", GroupEval::Columns)
                    .with_singular("Symbols in the same column")
                    .with_tags(&[Tag::Position])
                    .with_weight(10),
            )
            .with(
                Group,
                Alternative::new("same_color", GroupEval::SameColor)
                    .with_singular("Symbols with the same color")
                    .with_tags(&[Tag::Color])
                    .with_weight(10),
            )
            .with(
                Group,
                Alternative::new("same_shape", GroupEval::SameShape)
                    .with_singular("Symbols with the same shape")
                    .with_tags(&[Tag::Shape])
                    .with_weight(10),
            )
            .with(
                Group,
                Alternative::new("identical", GroupEval::Identical)
                    .with_singular("Identical symbols")
                    .with_tags(&[Tag::Shape, Tag::Color])
                    .with_weight(10),
            )
            .with(
                Group,
                Alternative::new("adjacent", GroupEval::AdjacentPairs)
                    .with_singular("Adjacent symbols")
                    .with_tags(&[Tag::Position])
                    .with_weight(20),
            )
            // ==================== groupPred ====================
            .with(
                GroupPred,
                Alternative::new("same_color", GroupPredEval::SameColor)
                    .with_singular("are the same color")
                    .with_tags(&[Tag::Color])
                    .with_weight(20),
            )
            .with(
                GroupPred,
                Alternative::new("different_colors", GroupPredEval::DifferentColors)
                    .with_singular("are different colors")
                    .with_tags(&[Tag::Color])
                    .with_weight(10),
            )
            .with(
                GroupPred,
                Alternative::new("same_shape", GroupPredEval::SameShape)
                    .with_singular("are the same shape")
                    .with_tags(&[Tag::Shape])
                    .with_weight(20),
            )
            .with(
                GroupPred,
                Alternative::new("different_shapes", GroupPredEval::DifferentShapes)
                    .with_singular("are different shapes")
                    .with_tags(&[Tag::Shape])
                    .with_weight(10),
            )
            .with(
                GroupPred,
                Alternative::new("same_color_or_shape", GroupPredEval::SameColorOrShape)
                    .with_singular("are the same color or shape")
                    .with_tags(&[Tag::Color, Tag::Shape])
                    .with_weight(20),
            )
            // Unreachable at weight 0; kept so the table can re-enable it.
            .with(
                GroupPred,
                Alternative::new("identical", GroupPredEval::Identical)
                    .with_singular("are identical")
                    .with_tags(&[Tag::Color, Tag::Shape])
                    .with_weight(0),
            )
            .with(
                GroupPred,
                Alternative::new("connected", GroupPredEval::Connected)
                    .with_singular("form a connected cluster")
                    .with_tags(&[Tag::Position])
                    .with_weight(20),
            )
    }
}

impl Default for Grammar {
    fn default() -> Self {
        Self::standard()
    }
}
