//! Property-based tests for the selection cursor.
//!
//! Whatever sequence of moves is applied, the index stays inside
//! `[0, count - 1]` (or at 0 for an empty list).

use proptest::prelude::*;

use tabfinder::managers::selection_controller::{SelectionController, SelectionControllerTrait};
use tabfinder::types::ranking::RankedResult;
use tabfinder::types::tab::{RawTab, TabRecord};

#[derive(Debug, Clone)]
enum Move {
    Down,
    Up,
    Reset,
}

fn arb_moves() -> impl Strategy<Value = Vec<Move>> {
    prop::collection::vec(
        prop_oneof![
            4 => Just(Move::Down),
            4 => Just(Move::Up),
            1 => Just(Move::Reset),
        ],
        0..60,
    )
}

fn results(count: usize) -> Vec<RankedResult> {
    (0..count)
        .map(|i| {
            let raw = RawTab {
                id: i as i64,
                title: String::new(),
                url: String::new(),
                window_id: 1,
                fav_icon_url: None,
                audible: false,
                pinned: false,
            };
            RankedResult {
                tab: TabRecord::from_raw(&raw, 0),
                score: 1,
            }
        })
        .collect()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    #[test]
    fn index_stays_in_bounds(count in 0..8usize, moves in arb_moves()) {
        let mut sel = SelectionController::new();
        sel.set_results(results(count));

        for m in &moves {
            match m {
                Move::Down => sel.move_down(),
                Move::Up => sel.move_up(),
                Move::Reset => sel.reset(),
            }
            if count == 0 {
                prop_assert_eq!(sel.selected_index(), 0);
                prop_assert!(sel.current().is_none());
            } else {
                prop_assert!(sel.selected_index() < count);
                prop_assert_eq!(sel.current().map(|t| t.id), Some(sel.selected_index() as i64));
            }
        }
    }
}
