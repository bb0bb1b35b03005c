//! 可复用 UI 组件

pub mod markup;
pub mod modal;
pub mod navigation;
pub mod pager;
pub mod statusbar;
