use crate::domain::entities::artifact::Artifact;

/// Exit code of a run that produced (or completed) a scaffold.
pub const EXIT_SUCCESS: i32 = 0;

/// Exit code of a run that found an existing manifest, or showed help.
pub const EXIT_NOT_RUN: i32 = -1;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScaffoldStatus {
    /// The creation pass ran.
    Created,
    /// A manifest already existed; nothing was touched.
    AlreadyInitialized,
}

/// What a scaffold run did, in creation order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScaffoldOutcome {
    pub status: ScaffoldStatus,
    pub created: Vec<Artifact>,
    pub skipped: Vec<Artifact>,
}

impl ScaffoldOutcome {
    pub fn already_initialized() -> Self {
        Self {
            status: ScaffoldStatus::AlreadyInitialized,
            created: Vec::new(),
            skipped: Vec::new(),
        }
    }

    pub fn created() -> Self {
        Self {
            status: ScaffoldStatus::Created,
            created: Vec::new(),
            skipped: Vec::new(),
        }
    }

    pub fn exit_code(&self) -> i32 {
        match self.status {
            ScaffoldStatus::Created => EXIT_SUCCESS,
            ScaffoldStatus::AlreadyInitialized => EXIT_NOT_RUN,
        }
    }
}
