//! 页面数据状态
//!
//! 每个页面的业务数据容器：列表、选中项、加载状态、错误信息。
//! 五个检索页共用 `SearchPanel<I>`，只有行类型不同。

mod home;
mod modal;
mod search;
mod settings;

pub use home::HomeState;
pub use modal::{Modal, ModalState};
pub use search::{DetailPanel, SearchPanel, DEFAULT_PAGE_SIZE};
pub use settings::{SettingsRow, SettingsState};
