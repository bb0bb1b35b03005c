//! HSRDB Browser TUI
//!
//! ## 架构
//!
//! 采用 Elm Architecture (TEA) 模式：
//! - **Model**: 应用状态 (`model/`)
//! - **Message**: 事件消息 + 副作用指令 (`message/`)
//! - **Update**: 状态更新 (`update/`)
//! - **View**: UI 渲染 (`view/`)
//! - **Event**: 输入处理 (`event/`)
//! - **Backend**: 配置与远端查询服务 (`backend/`)
//!
//!
//! main.rs
//! HSRDB Browser 的程序入口
//!
//! 其执行：
//! fn `main()` {
//!
//!     LocalConfigService.load()       // 读取本地配置（缺失/损坏则用默认值）
//!     model::App::new(&config)        // 创建 APP 实例（含界面语言与主题）
//!     QueryService::new(&config)      // 创建后台查询服务（tokio 运行时 + HTTP 客户端）
//!     update::startup()               // 首屏副作用：拉取数据集统计
//!     init_terminal()                 // 初始化终端，以为 terminal: Terminal<...>
//!     app::run()                      // 运行 app.rs 主循环
//!     restore_terminal()              // 无论成功与否，都恢复终端
//!
//! }

mod app;
mod backend;
mod event;
pub mod i18n;
mod message;
mod model;
mod update;
mod util;
mod view;

use anyhow::Result;

use backend::{LocalConfigService, QueryService};
use util::{init_terminal, restore_terminal};

fn main() -> Result<(), anyhow::Error> {
    // 1. 读取本地配置
    let config = LocalConfigService.load();

    // 2. 创建应用实例与后台服务
    let mut app = model::App::new(&config);
    let mut backend = QueryService::new(&config)?;

    // 3. 首屏副作用（数据集统计）
    backend.dispatch_all(update::startup(&mut app));

    // 4. 初始化终端
    let mut terminal = init_terminal()?;

    // 5. 运行主循环
    let result = app::run(&mut terminal, &mut app, &mut backend);

    // 6. 恢复终端（无论成功失败都执行）
    restore_terminal(&mut terminal)?;

    // 7. 返回结果
    result
}
