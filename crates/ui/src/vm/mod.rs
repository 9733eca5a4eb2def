mod classroom_vm;
mod result_vm;

pub use classroom_vm::{ClassroomCardVm, map_classroom_card, map_classroom_cards};
pub use result_vm::{QuestionRowVm, ResultSummaryVm, map_result};
