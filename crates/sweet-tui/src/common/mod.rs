mod request_id;
mod task;

pub use request_id::{LatestOnly, RequestId};
pub use task::{TaskId, TaskKind, TaskSeq, TaskState, Tasks};
