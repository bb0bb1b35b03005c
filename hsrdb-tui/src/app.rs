//!
//! app.rs
//! 应用主循环
//!
//!
//! 主循环大约每 100 ms 执行一次（取决于有无事件）：
//! loop {
//!
//!     terminal.draw(|f| view::render(&app , f))       // 渲染 UI
//!     if app.should_quit{ break }                     // 检查 APP 是否应该退出
//!
//!     while let Some(resp) = backend.try_recv() {     // 先消化后台送回的响应
//!         update::update(&mut app , Response(resp))       // 过期令牌在 update 层被丢弃
//!     }
//!
//!     if let Some(event) = poll_event() {             // 轮询获取输入，在此等待 100ms
//!         let msg = handle_event(event , &app);           // 接收原始事件并分发消息
//!         let commands = update::update(&mut app , msg)   // 更新终端状态，收集副作用
//!         backend.dispatch_all(commands)                  // 副作用交给后台执行
//!     }
//! }

use std::time::Duration;

use anyhow::Result;

use crate::backend::QueryService;
use crate::event;
use crate::message::AppMessage;
use crate::model::App;
use crate::update;
use crate::util::Term;
use crate::view;

/// 轮询周期，同时也是后台响应的消化节奏
const TICK: Duration = Duration::from_millis(100);

/// 运行应用主循环
pub fn run(terminal: &mut Term, app: &mut App, backend: &mut QueryService) -> Result<()> {
    loop {
        // 1. 渲染 UI
        terminal.draw(|frame| {
            view::render(app, frame);
        })?;

        // 2. 检查是否应该退出
        if app.should_quit {
            break;
        }

        // 3. 消化后台响应（可能触发新的副作用，例如语言切换后的连锁刷新）
        while let Some(response) = backend.try_recv() {
            let commands = update::update(app, AppMessage::Response(response));
            backend.dispatch_all(commands);
        }

        // 4. 轮询事件（100ms 超时）
        if let Some(event) = event::poll_event(TICK)? {
            // 5. 处理事件，获取消息
            let msg = event::handle_event(event, app);

            // 6. 更新状态，并把副作用交给后台
            let commands = update::update(app, msg);
            backend.dispatch_all(commands);
        }
    }

    Ok(())
}
