//! Hand-built rules judged against hand-written grids.
//!
//! Grids are in compact form, one row per line, `.` for empty cells.

use zendo_tests::prelude::*;

mod quantified {
    use super::*;

    #[test]
    fn test_every_red_symbol_is_a_circle() {
        Scenario::new("every_red_circle")
            .rule(every(noun(NOUN_COLOR, RED), pred(PRED_SHAPE, CIRCLE)))
            .describes("Every red symbol is a circle")
            .holds("rC . .\n. bS .\n. . rC")
            .holds(". . .\n. yT .\n. . .")
            .holds(". . .\n. . .\n. . .")
            .fails("rS . .\n. . .\n. . .")
            .fails("rC rC .\n. . .\n. . rT")
            .run()
            .unwrap();
    }

    #[test]
    fn test_every_bottom_row_symbol_is_yellow() {
        Scenario::new("bottom_row_yellow")
            .rule(every(noun(NOUN_ROW, BOTTOM), pred(PRED_COLOR, YELLOW)))
            .describes("Every symbol in the bottom row is yellow")
            .holds("rC . .\n. . .\nyC . yS")
            .fails(". . .\n. . .\nyC rC .")
            .run()
            .unwrap();
    }

    #[test]
    fn test_exists_triangle_in_top_row() {
        Scenario::new("top_triangle")
            .rule(exists(noun(NOUN_SHAPE, TRIANGLE), pred(PRED_ROW, TOP)))
            .describes("There is a triangle that is in the top row")
            .holds("yT . .\n. . .\n. . .")
            .fails(". . .\nyT . .\n. . .")
            .fails(". . .\n. . .\n. . .")
            .run()
            .unwrap();
    }

    #[test]
    fn test_exists_blue_symbol_in_right_column() {
        Scenario::new("blue_right")
            .rule(exists(noun(NOUN_COLOR, BLUE), pred(PRED_COLUMN, RIGHT)))
            .describes("There is a blue symbol that is in the right column")
            .holds(". . .\n. . bT\n. . .")
            .fails("bT . .\n. bS .\n. . rC")
            .run()
            .unwrap();
    }

    #[test]
    fn test_no_blank_cell_is_adjacent_to_blue() {
        Scenario::new("no_blank_next_to_blue")
            .rule(none_is(blank(), adjacent_to(noun(NOUN_COLOR, BLUE))))
            .describes("No blank cell is adjacent to a blue symbol")
            .holds("bC rS .\nrT . .\n. . .")
            .holds(". . .\n. . .\n. . .")
            .fails("bC rS .\n. . .\n. . .")
            .run()
            .unwrap();
    }

    #[test]
    fn test_left_column_adjacent_to_circle() {
        Scenario::new("left_next_to_circle")
            .rule(every(
                noun(NOUN_COLUMN, LEFT),
                adjacent_to(noun(NOUN_SHAPE, CIRCLE)),
            ))
            .describes("Every symbol in the left column is adjacent to a circle")
            .holds("rS bC .\n. . .\n. . .")
            .fails("rS . bC\n. . .\n. . .")
            .run()
            .unwrap();
    }

    #[test]
    fn test_no_circle_in_middle_row() {
        Scenario::new("no_middle_circle")
            .rule(none_is(noun(NOUN_SHAPE, CIRCLE), pred(PRED_ROW, MIDDLE)))
            .describes("No circle is in the middle row")
            .holds("rC . .\n. rS .\n. . bC")
            .fails(". . .\n. bC .\n. . .")
            .run()
            .unwrap();
    }

    #[test]
    fn test_blank_cell_that_is_red_never_exists() {
        Scenario::new("red_blank")
            .rule(exists(blank(), pred(PRED_COLOR, RED)))
            .describes("There is a blank cell that is red")
            .fails(". . .\n. . .\n. . .")
            .fails("rC rC rC\nrC . rC\nrC rC rC")
            .run()
            .unwrap();
    }
}

mod groups {
    use super::*;

    #[test]
    fn test_rows_are_the_same_shape() {
        Scenario::new("rows_same_shape")
            .rule(for_groups(group(GROUP_ROWS), group_pred(GPRED_SAME_SHAPE)))
            .describes("Symbols in the same row are the same shape")
            .holds("rC bC .\nyS . yS\n. . .")
            .fails("rC bT .\n. . .\n. . .")
            .run()
            .unwrap();
    }

    #[test]
    fn test_columns_are_different_colors() {
        Scenario::new("columns_different_colors")
            .rule(for_groups(
                group(GROUP_COLUMNS),
                group_pred(GPRED_DIFFERENT_COLORS),
            ))
            .describes("Symbols in the same column are different colors")
            .holds("rC rC .\nbC . .\nyC . .")
            .fails("rC . .\nrT . .\n. . .")
            .run()
            .unwrap();
    }

    #[test]
    fn test_all_symbols_connected() {
        Scenario::new("all_connected")
            .rule(for_groups(group(GROUP_ALL), group_pred(GPRED_CONNECTED)))
            .describes("All symbols form a connected cluster")
            .holds("rC bC .\n. yS .\n. . .")
            .holds(". . .\n. . .\n. . .")
            .fails("rC . bC\n. . .\n. . .")
            .run()
            .unwrap();
    }

    #[test]
    fn test_same_color_different_shapes() {
        Scenario::new("color_groups_distinct_shapes")
            .rule(for_groups(
                group(GROUP_SAME_COLOR),
                group_pred(GPRED_DIFFERENT_SHAPES),
            ))
            .describes("Symbols with the same color are different shapes")
            .holds("rC rT rS\nbC bT .\n. . .")
            .fails("rC . rC\n. . .\n. . .")
            .run()
            .unwrap();
    }

    #[test]
    fn test_identical_symbols_connected() {
        Scenario::new("identical_connected")
            .rule(for_groups(
                group(GROUP_IDENTICAL),
                group_pred(GPRED_CONNECTED),
            ))
            .describes("Identical symbols form a connected cluster")
            .holds("rC rC .\n. . .\n. . bS")
            .fails("rC . rC\n. . .\n. . .")
            .run()
            .unwrap();
    }

    #[test]
    fn test_adjacent_symbols_same_color() {
        Scenario::new("adjacent_same_color")
            .rule(for_groups(
                group(GROUP_ADJACENT),
                group_pred(GPRED_SAME_COLOR),
            ))
            .describes("Adjacent symbols are the same color")
            .holds("rC rT .\n. . .\nbS . .")
            .fails("rC bT .\n. . .\n. . .")
            .run()
            .unwrap();
    }

    #[test]
    fn test_shape_groups_are_trivially_same_color_or_shape() {
        let scenario = Scenario::new("shape_groups_tautology")
            .rule(for_groups(
                group(GROUP_SAME_SHAPE),
                group_pred(GPRED_SAME_COLOR_OR_SHAPE),
            ))
            .describes("Symbols with the same shape are the same color or shape");

        let rule = scenario.build().unwrap();
        let mut rng = seeded(40);
        for _ in 0..500 {
            assert!(rule.evaluate(&zendo_sampler::random_grid(&mut rng)));
        }
        scenario.run().unwrap();
    }
}

mod filled {
    use super::*;

    #[test]
    fn test_row_filled_with_squares() {
        Scenario::new("row_of_squares")
            .rule(row_filled(noun(NOUN_SHAPE, SQUARE)))
            .describes("There is a row filled with squares")
            .holds(". . .\nrS bS yS\n. . .")
            .fails("rS bS .\n. . .\n. . .")
            .run()
            .unwrap();
    }

    #[test]
    fn test_column_filled_with_blank_cells() {
        Scenario::new("blank_column")
            .rule(column_filled(blank()))
            .describes("There is a column filled with blank cells")
            .holds("rC . .\nrC . .\nrC . .")
            .fails("rC bC yC\n. . .\n. . .")
            .run()
            .unwrap();
    }

    #[test]
    fn test_row_filled_with_red_symbols() {
        Scenario::new("red_row")
            .rule(row_filled(noun(NOUN_COLOR, RED)))
            .describes("There is a row filled with red symbols")
            .holds(". . .\nrC rT rS\n. . .")
            .fails(". . .\nrC bT rS\n. . .")
            .run()
            .unwrap();
    }
}

mod framework {
    use super::*;

    #[test]
    fn test_wrong_description_is_reported() {
        let result = Scenario::new("mislabelled")
            .rule(every(noun(NOUN_COLOR, RED), pred(PRED_SHAPE, CIRCLE)))
            .describes("Every red symbol is a square")
            .run();
        assert!(matches!(result, Err(ScenarioError::Description { .. })));
    }

    #[test]
    fn test_wrong_verdict_is_reported() {
        let result = Scenario::new("wrong_verdict")
            .rule(every(noun(NOUN_COLOR, RED), pred(PRED_SHAPE, CIRCLE)))
            .holds(". . .\n. . .\n. . .")
            .holds("rS . .\n. . .\n. . .")
            .run();
        assert!(matches!(
            result,
            Err(ScenarioError::Verdict {
                step: 2,
                expected: true,
                ..
            })
        ));
    }

    #[test]
    fn test_bad_grid_is_reported() {
        let result = Scenario::new("bad_grid")
            .rule(column_filled(blank()))
            .fails("rC gC")
            .run();
        assert!(matches!(result, Err(ScenarioError::Grid { step: 1, .. })));
    }

    #[test]
    fn test_missing_rule_is_reported() {
        assert!(matches!(
            Scenario::new("empty").run(),
            Err(ScenarioError::MissingRule { .. })
        ));
    }

    #[test]
    fn test_missing_alternative_is_reported() {
        let result = Scenario::new("bad_skeleton")
            .rule(every(noun(NOUN_COLOR, RED), pred(9, 0)))
            .run();
        assert!(matches!(result, Err(ScenarioError::Rule { .. })));
    }
}
