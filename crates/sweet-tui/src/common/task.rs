//! Task ids and lifecycle state for one-at-a-time async operations.
//!
//! Searches use `LatestOnly` instead (they supersede each other); purchases
//! use neither (each purchase is independent).

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TaskId(pub u64);

#[derive(Debug, Default)]
pub struct TaskSeq {
    next: u64,
}

impl TaskSeq {
    pub fn next_id(&mut self) -> TaskId {
        let id = TaskId(self.next);
        self.next = self.next.wrapping_add(1);
        id
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TaskKind {
    Login,
    Register,
    AdminRefresh,
    AdminDelete,
    AdminRestock,
}

/// Task lifecycle state (stored in AppState, mutated only by the reducer).
#[derive(Debug, Default, Clone)]
pub struct TaskState {
    pub active: Option<TaskId>,
}

impl TaskState {
    pub fn is_running(&self) -> bool {
        self.active.is_some()
    }

    pub fn start(&mut self, id: TaskId) {
        self.active = Some(id);
    }

    pub fn finish_if_active(&mut self, id: TaskId) -> bool {
        let ok = self.active == Some(id);
        if ok {
            self.active = None;
        }
        ok
    }
}

#[derive(Debug, Default, Clone)]
pub struct Tasks {
    pub login: TaskState,
    pub register: TaskState,
    pub admin_refresh: TaskState,
    pub admin_delete: TaskState,
    pub admin_restock: TaskState,
}

impl Tasks {
    pub fn state_mut(&mut self, kind: TaskKind) -> &mut TaskState {
        match kind {
            TaskKind::Login => &mut self.login,
            TaskKind::Register => &mut self.register,
            TaskKind::AdminRefresh => &mut self.admin_refresh,
            TaskKind::AdminDelete => &mut self.admin_delete,
            TaskKind::AdminRestock => &mut self.admin_restock,
        }
    }
}
