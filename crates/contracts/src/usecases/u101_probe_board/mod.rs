pub mod request;
pub mod response;

pub use request::BoardRequest;
pub use response::{BoardResponse, CellReport, CellVerdict, Slot};

use crate::usecases::common::UseCaseMetadata;

pub struct ProbeBoard;

impl UseCaseMetadata for ProbeBoard {
    fn usecase_index() -> &'static str {
        "u101"
    }

    fn usecase_name() -> &'static str {
        "probe_board"
    }

    fn display_name() -> &'static str {
        "Probe status board"
    }

    fn description() -> &'static str {
        "Fetch every eligible catalogue cell and project pass/fail verdicts"
    }
}
