//! View-models: one per screen, each holding a UI-state value object behind
//! an `Arc<RwLock<_>>`. Operations await one or two repositories and then
//! replace the state; screens read snapshots via `state()`.

pub mod viewmodels;

pub use viewmodels::board::{BoardColumn, BoardUiState, BoardViewModel};
pub use viewmodels::epics::{EpicsUiState, EpicsViewModel};
pub use viewmodels::members::{MembersUiState, MembersViewModel};
pub use viewmodels::messaging::{MessagingUiState, MessagingViewModel};
pub use viewmodels::notifications::{NotificationsUiState, NotificationsViewModel};
pub use viewmodels::reports::{ReportsUiState, ReportsViewModel};
pub use viewmodels::session::{SessionUiState, SessionViewModel};
pub use viewmodels::sprint_planning::{SprintPlanningUiState, SprintPlanningViewModel};
pub use viewmodels::task_detail::{TaskDetailUiState, TaskDetailViewModel};
pub use viewmodels::workspace_list::{WorkspaceListUiState, WorkspaceListViewModel};
