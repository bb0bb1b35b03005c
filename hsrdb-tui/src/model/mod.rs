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
//! src/model/mod.rs
//! Model 层：应用状态定义
//!
//! Model 层是应用状态的 “唯一真相来源”。
//! 这一层只包含纯数据结构和最小的状态机方法，不发起任何网络请求。
//! 所有状态变更都通过 Update 层来触发。
//!
//!
//! 模块结构：
//!     src/model/mod.rs
//!         mod app;            // 主应用状态
//!         mod focus;          // 焦点状态（Navigation / Content）
//!         mod navigation;     // 导航栏状态
//!         mod page;           // 页面路由状态
//!
//!         pub mod state;      // 页面数据状态
//!
//!     值得一提的是，虽说 page.rs 与 state/ 都表示页面状态，但两者有不同：
//!         - Page 是一个简单的枚举，表示当前应用处于哪个“页面”，相当于房间的门牌号，
//!             只负责标识位置，不存储任何业务数据；
//!         - State 是各个页面的业务数据容器，存储着检索结果、选中项、加载状态等，
//!             相当于储存了房间的内容。
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 一、主应用状态（App）
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     在 src/model/app.rs 中定义：
//!
//!         pub struct App {
//!             pub should_quit: bool,              // 退出标志
//!             pub focus: FocusPanel,              // 当前焦点
//!             pub navigation: NavigationState,    // 导航状态
//!             pub current_page: Page,             // 当前页面
//!             pub status_message: Option<String>, // 状态栏消息（可选）
//!
//!             // 以及各页面状态：
//!             pub home: HomeState,                         // 首页（统计横幅）
//!             pub avatars: SearchPanel<AvatarRow>,         // 角色检索页
//!             pub dialogues: SearchPanel<DialogueRow>,     // 对话检索页
//!             pub missions: SearchPanel<MissionRow>,       // 任务检索页
//!             pub items: SearchPanel<ItemRow>,             // 物品检索页
//!             pub monsters: SearchPanel<MonsterRow>,       // 敌人检索页
//!
//!             pub modal: ModalState               // 弹窗状态
//!         }
//!
//!     使用：
//!         - 在 main.rs 中创建：let mut app = model::App::new(&config);
//!         - 在 update/mod.rs 中修改：app.should_quit = true;
//!         - 在 view/mod.rs 中读取：pub fn render(app: &App, ...)
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 二、检索面板（SearchPanel<I>）
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     五个数据域的检索页共享同一个泛型状态机（src/model/state/search.rs）：
//!
//!         SearchPanel<I> {
//!             input: String,                  // 输入框内容
//!             query: SearchQuery,             // 最近提交的查询
//!             result: Option<PageResult<I>>,  // 当前页结果
//!             selected: usize,                // 选中条目
//!             seq: RequestSeq,                // 请求序号
//!             detail: DetailPanel,            // 详情面板
//!         }
//!
//!     关键约定：每次发起请求都通过 seq.begin() 领取令牌，响应回来时
//!     携带令牌提交；令牌过期（用户又发了新请求）的响应直接丢弃，
//!     保证慢响应永远不会覆盖新结果。
//!
//!     数据流：
//!         用户在检索页按 Enter
//!             ↓
//!         update/content.rs 调用 panel.begin_search() 并返回 Command::Search
//!             ↓
//!         backend 层异步请求，完成后投递 ResponseMessage::Search
//!             ↓
//!         update/response.rs 校验令牌后调用 panel.commit()
//!             ↓
//!         view/pages/*.rs 渲染新一页结果
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 三、弹窗状态（ModalState）
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     在 src/model/state/modal.rs 中定义：
//!
//!         Modal 枚举：每种弹窗都是一个变体，携带该弹窗的所有数据
//!             - TermLookup { term, domain, reply, loading, error }
//!             - PageJump { input }
//!             - Help, Error { title, message }
//!
//!         ModalState 容器：管理当前活动的弹窗
//!             - active: Option<Modal>    // None = 无弹窗, Some = 有弹窗
//!             - show_xxx() 方法：初始化并显示特定弹窗
//!             - close() 方法：关闭弹窗
//!
//!
//! Model 层的数据被 Update 层修改，然后被 View 层读取并渲染成 UI。
//!

mod app;
mod focus;
mod navigation;
mod page;
pub mod state;

pub use app::App;
pub(crate) use app::with_panel;
pub use focus::FocusPanel;
pub use navigation::{NavItemId, NavigationState};
pub use page::Page;
pub use state::{
    DetailPanel, HomeState, Modal, ModalState, SearchPanel, SettingsRow, SettingsState,
    DEFAULT_PAGE_SIZE,
};
