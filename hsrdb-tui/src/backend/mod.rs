//！┌─────────────────────────────────────────────────────────────────────────────┐
//！│                              主循环 (app.rs)                               │
//！│                                                                            │
//！│  ┌────────────────────────────── UI 层 ───────────────────────────────┐   │
//！│  │                                                                     │   │
//！│  │   ┌─────────┐          ┌───────────┐          ┌──────────┐         │   │
//！│  │   │  Event  │ ───────▶ │  Message  │ ───────▶ │  Update  │         │   │
//！│  │   │   层    │   翻译    │    层     │   消费    │    层    │         │   │
//！│  │   └─────────┘          │           │          └────┬─────┘         │   │
//！│  │        ▲               │ AppMessage│               │ 修改          │   │
//！│  │        │               │ ModalMsg  │               ▼               │   │
//！│  │   ┌─────────┐          │ ContentMsg│          ┌──────────┐         │   │
//！│  │   │  View   │          │ NavMsg    │   ┌───── │  Model   │         │   │
//！│  │   │   层    │          └───────────┘   │      │    层    │         │   │
//！│  │   └────┬────┘ ◀──────── 读取 ──────────┘      └────┬─────┘         │   │
//！│  │        │                                           │               │   │
//！│  └────────│───────────────────────────────────────────│───────────────┘   │
//！│           │                                           │ 异步调用          │
//！│           ▼                                           ▼                   │
//！│      ┌─────────┐                                ┌──────────┐              │
//！│      │  终端   │                                │ Backend  │              │
//！│      │ (Util)  │                                │    层    │              │
//！│      └─────────┘                                └────┬─────┘              │
//！│                                                      │                    │
//！│                                                      ▼                    │
//！│                                           ┌───────────────────┐           │
//！│                                           │    hsrdb-core     │           │
//！│                                           └───────────────────┘           │
//！└─────────────────────────────────────────────────────────────────────────────┘
//!
//!
//! src/backend/mod.rs
//! Backend 层：异步执行与持久化
//!
//! Backend 层与 UI 完全解耦，负责所有的副作用。
//! 通过 hsrdb-core 库访问数据服务。
//!
//!
//! 模块结构：
//!     src/backend/mod.rs
//!         mod query_service;      // 异步查询执行（tokio 运行时 + 响应通道）
//!         mod config_service;     // 配置持久化（JSON 文件）
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 数据流
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     用户在检索页按 Enter
//!         ↓
//!     Update 层处理 ContentMessage::Submit，返回 Command::Search
//!         ↓
//!     主循环调用 QueryService::dispatch()
//!         ↓
//!     tokio 任务调用 hsrdb-core 的 QueryClient（异步 HTTP）
//!         ↓
//!     结果包成 ResponseMessage 投入无界通道
//!         ↓
//!     主循环每个 tick 调用 try_recv() 取出响应
//!         ↓
//!     Update 层校验令牌后提交到 Model
//!         ↓
//!     View 层重新渲染
//!

mod config_service;
mod query_service;

pub use config_service::{AppConfig, LocalConfigService};
pub use query_service::QueryService;
