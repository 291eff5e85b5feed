use std::rc::Rc;

use spinwheel_shared::ScoreLedger;
use yew::prelude::*;

#[derive(Debug, Clone, PartialEq)]
pub struct LedgerState {
    pub ledger: ScoreLedger,
}

pub enum LedgerAction {
    RecordWin(String),
}

impl Reducible for LedgerState {
    type Action = LedgerAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut ledger = self.ledger.clone();
        match action {
            LedgerAction::RecordWin(name) => {
                ledger.record_win(&name);
            }
        }
        Rc::new(Self { ledger })
    }
}

/// Session score tally. Dispatching never reads a stale ledger, so it is
/// safe to capture the handle in long-lived callbacks.
#[hook]
pub fn use_ledger(points_per_win: u32) -> UseReducerHandle<LedgerState> {
    use_reducer(move || LedgerState { ledger: ScoreLedger::with_points(points_per_win) })
}
