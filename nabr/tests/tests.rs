#[cfg(test)]
mod tests {
    use nabr::entities::{Mix, PlanShape, UnitType};
    use nabr::io::{export, import};
    use nabr::io::ext_repr::ExtFillRequest;
    use nabr::nodes::{self, LogSink, PlanInputs, RecordingSink};
    use test_case::test_case;

    fn init_logger() {
        let _ = env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Debug)
            .is_test(true)
            .try_init();
    }

    fn plan_inputs(tag: &str, rows: i64, cols: i64) -> PlanInputs {
        PlanInputs {
            tag: tag.to_string(),
            dimensions: vec![rows, cols],
            ..PlanInputs::default()
        }
    }

    fn strings(s: &[&str]) -> Vec<String> {
        s.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn l_shape_blocks_for_all_small_dimensions() {
        let mut sink = RecordingSink::default();
        for rows in 1..=12 {
            for cols in 1..=12 {
                let plan = nodes::generate_plan(&plan_inputs("L", rows, cols), &mut sink).unwrap();
                let (rows, cols) = (rows as usize, cols as usize);
                let (arm1_rows, arm1_cols) = (rows / 2, cols / 2);
                let arm2_cols = cols - arm1_cols;
                for r in 0..rows {
                    for c in 0..cols {
                        let occupied = plan.is_occupied(r, c);
                        if r < arm1_rows && c < arm1_cols {
                            assert!(occupied, "top-left block ({r}, {c}) of {rows}x{cols}");
                        }
                        if r >= arm1_rows && c >= arm2_cols {
                            assert!(!occupied, "bottom-right ({r}, {c}) of {rows}x{cols}");
                        }
                        if r < arm1_rows && c >= arm1_cols {
                            assert!(!occupied, "top-right ({r}, {c}) of {rows}x{cols}");
                        }
                    }
                }
            }
        }
        assert!(sink.warnings.is_empty());
    }

    #[test_case("T"; "unknown letter")]
    #[test_case("rectangle"; "word")]
    #[test_case("square-shape"; "hyphenated")]
    fn unknown_tags_occupy_every_cell(tag: &str) {
        let mut sink = RecordingSink::default();
        for (rows, cols) in [(1, 1), (3, 7), (10, 5), (13, 2)] {
            let plan = nodes::generate_plan(&plan_inputs(tag, rows, cols), &mut sink).unwrap();
            assert_eq!(plan.shape(), PlanShape::Rectangular);
            assert_eq!(plan.n_occupied(), (rows * cols) as usize);
        }
    }

    #[test_case("L", 25; "l")]
    #[test_case("Mirrored L", 25; "mirrored l")]
    #[test_case("U", 25; "u")]
    fn footprint_sizes_of_default_dimensions(tag: &str, expected: usize) {
        // 10 x 5: arm1_rows = 5; L arms 2 and 3 columns wide, U legs 1 + 1 and bottom band 3
        let plan = nodes::generate_plan(
            &PlanInputs {
                tag: tag.to_string(),
                ..PlanInputs::default()
            },
            &mut LogSink,
        )
        .unwrap();
        assert_eq!(plan.n_occupied(), expected);
    }

    #[test]
    fn u_shape_keeps_asymmetric_bottom_band() {
        let plan = nodes::generate_plan(&plan_inputs("U", 6, 9), &mut LogSink).unwrap();
        let rows = export::export_plan(&plan).occupancy;
        assert_eq!(
            rows,
            vec![
                "###...###",
                "###...###",
                "###...###",
                "###......",
                "###......",
                "###......",
            ]
        );
    }

    #[test]
    fn plan_generation_is_idempotent() {
        let mut sink = RecordingSink::default();
        let inputs = plan_inputs("mirrored-l-shape", 11, 7);
        let a = nodes::generate_plan(&inputs, &mut sink).unwrap();
        let b = nodes::generate_plan(&inputs, &mut sink).unwrap();
        assert_eq!(a.grid(), b.grid());
        assert_eq!(a, b);
    }

    #[test]
    fn default_plan_inputs() {
        let mut sink = RecordingSink::default();
        let plan = nodes::generate_plan(&PlanInputs::default(), &mut sink).unwrap();
        assert_eq!(plan.shape(), PlanShape::L);
        assert_eq!(plan.dimensions(), [10, 5]);
        assert_eq!(plan.corridor_width(), 2.0);
        assert_eq!(plan.grid_size(), 8.5);
        assert_eq!(sink.log.len(), 2);
    }

    #[test_case(vec![10], "exactly two entries"; "single entry")]
    #[test_case(vec![i64::MAX, 4], "exceeds the limit"; "overflowing cell count")]
    #[test_case(vec![1 << 20, 1 << 20], "exceeds the limit"; "oversized")]
    fn malformed_plan_emits_one_warning(dimensions: Vec<i64>, message: &str) {
        let mut sink = RecordingSink::default();
        let inputs = PlanInputs {
            dimensions,
            ..PlanInputs::default()
        };
        assert!(nodes::generate_plan(&inputs, &mut sink).is_none());
        assert_eq!(sink.warnings.len(), 1);
        assert!(sink.warnings[0].contains(message));
    }

    #[test]
    fn mix_length_mismatch_fails_validation() {
        init_logger();
        let mut sink = RecordingSink::default();
        let mix = nodes::define_mix(
            Some(strings(&["A", "B"]).as_slice()),
            Some(&[0.3][..]),
            &mut sink,
        );
        assert!(mix.is_none());
        assert_eq!(
            sink.warnings,
            vec!["the number of cell types and densities must be the same (got 2 types and 1 densities)"]
        );
    }

    #[test]
    fn missing_inputs_abort_silently() {
        let mut sink = RecordingSink::default();
        assert!(nodes::define_mix(None, Some(&[0.3][..]), &mut sink).is_none());
        assert!(nodes::define_mix(Some(strings(&["A"]).as_slice()), None, &mut sink).is_none());

        let plan = nodes::generate_plan(&PlanInputs::default(), &mut sink).unwrap();
        let mix = Mix::try_new(&["A"], &[1.0]).unwrap();
        let cells = [UnitType::new("A", 5.0, 10.0)];
        assert!(nodes::fill_cells(None, Some(&cells[..]), Some(&mix), &mut sink).is_none());
        assert!(nodes::fill_cells(Some(&plan), None, Some(&mix), &mut sink).is_none());
        assert!(nodes::fill_cells(Some(&plan), Some(&cells[..]), None, &mut sink).is_none());

        assert!(sink.warnings.is_empty());
    }

    #[test]
    fn fill_counts_footprint_cells_only() {
        init_logger();
        let mut sink = RecordingSink::default();
        // rectangular 10 x 10: 100 footprint cells
        let plan = nodes::generate_plan(&plan_inputs("rect", 10, 10), &mut sink).unwrap();
        assert_eq!(plan.n_occupied(), 100);

        let mix = nodes::define_mix(
            Some(strings(&["A", "B"]).as_slice()),
            Some(&[0.6, 0.4][..]),
            &mut sink,
        )
        .unwrap();
        let cells = [UnitType::new("A", 5.0, 10.0)];
        let layout = nodes::fill_cells(Some(&plan), Some(&cells[..]), Some(&mix), &mut sink).unwrap();

        assert_eq!(layout.len(), 60);
        assert!(layout.iter().all(|pu| pu.unit_type == "A"));
        assert!(layout.iter().all(|pu| pu.rect.width() == 5.0 && pu.rect.height() == 10.0));
        assert!(layout.iter().all(|pu| (pu.rect.x_min, pu.rect.y_min) == (0.0, 0.0)));
        assert!(sink.warnings.is_empty());
    }

    #[test]
    fn fill_uses_occupied_cells_of_shaped_plans() {
        let mut sink = RecordingSink::default();
        // default L: 25 of 50 cells occupied
        let plan = nodes::generate_plan(&PlanInputs::default(), &mut sink).unwrap();
        let mix = Mix::try_new(&["1BR", "2BR", "3BR"], &[0.5, 0.3, 0.2]).unwrap();
        let cells = [
            UnitType::new("1BR", 6.0, 8.5),
            UnitType::new("2BR", 8.5, 8.5),
            UnitType::new("3BR", 8.5, 12.0),
        ];
        let layout = nodes::fill_cells(Some(&plan), Some(&cells[..]), Some(&mix), &mut sink).unwrap();
        // floor(12.5) + floor(7.5) + floor(5.0): no remainder distribution
        assert_eq!(layout.counts(), vec![("1BR", 12), ("2BR", 7), ("3BR", 5)]);
        assert_eq!(layout.len(), 24);
    }

    #[test]
    fn unit_type_absent_from_mix_is_skipped() {
        let mut sink = RecordingSink::default();
        let plan = nodes::generate_plan(&plan_inputs("L", 4, 4), &mut sink).unwrap();
        let mix = Mix::try_new(&["A"], &[0.5]).unwrap();
        let cells = [UnitType::new("Z", 5.0, 10.0), UnitType::new("A", 5.0, 10.0)];
        let layout = nodes::fill_cells(Some(&plan), Some(&cells[..]), Some(&mix), &mut sink).unwrap();
        assert_eq!(layout.counts(), vec![("A", 4)]);
        assert!(sink.warnings.is_empty());
    }

    #[test]
    fn oversized_mix_emits_one_warning() {
        let mut sink = RecordingSink::default();
        let plan = nodes::generate_plan(&plan_inputs("rect", 10, 10), &mut sink).unwrap();
        let mix = Mix::try_new(&["A"], &[1e30]).unwrap();
        let cells = [UnitType::new("A", 5.0, 10.0)];
        let layout = nodes::fill_cells(Some(&plan), Some(&cells[..]), Some(&mix), &mut sink);
        assert!(layout.is_none());
        assert_eq!(sink.warnings.len(), 1);
        assert!(sink.warnings[0].starts_with("the mix asks for more than"));
    }

    #[test]
    fn request_from_json() {
        let json = r#"{
            "name": "courtyard",
            "plan": { "type": "U", "dimensions": [6, 9], "grid_size": 8.5 },
            "mix": { "types": ["1BR", "2BR"], "densities": [0.5, 0.5] },
            "cells": [
                { "unit_type": "1BR", "width": 6.0, "length": 8.5 },
                { "unit_type": "2BR", "width": 8.5, "length": 8.5 }
            ]
        }"#;
        let request: ExtFillRequest = serde_json::from_str(json).unwrap();
        let mut sink = RecordingSink::default();

        let inputs = import::import_plan_inputs(&request.plan);
        assert_eq!(inputs.corridor_width, 2.0);
        let plan = nodes::generate_plan(&inputs, &mut sink).unwrap();
        let mix = nodes::define_mix(
            Some(request.mix.types.as_slice()),
            Some(request.mix.densities.as_slice()),
            &mut sink,
        )
        .unwrap();
        let cells = import::import_unit_types(&request.cells).unwrap();
        let layout = nodes::fill_cells(Some(&plan), Some(&cells[..]), Some(&mix), &mut sink).unwrap();

        // U 6 x 9: 3 * 6 + 3 * 3 = 27 cells, floor(13.5) per type
        let ext = export::export_packed_layout(&plan, &layout);
        assert_eq!(ext.plan.n_occupied, 27);
        assert_eq!(ext.counts.iter().map(|c| c.count).collect::<Vec<_>>(), vec![13, 13]);
        assert_eq!(ext.placed_units.len(), 26);
        assert_eq!(ext.placed_units[13].unit_type, "2BR");
    }
}
