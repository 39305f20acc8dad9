//!
//! app.rs
//! 应用主循环
//!
//!
//! 在应用启动时，App 的初始状态为：
//!
//! App {
//!
//!     should_quit: false,
//!     zones.focused: true,                            // Zones 表拥有焦点
//!     records.focused: false,
//!     pending_loads: 0,                               // init 之后变为 1（zone 列表）
//!     popup: None,
//!     status_message: None,
//!
//! }
//!
//!
//! 主循环每一轮：
//! loop {
//!
//!     terminal.draw(|f| view::render(&app, f))        // 渲染 UI
//!     if app.should_quit { break }                    // 检查是否应该退出
//!     while let Ok(msg) = rx.try_recv() {             // 取出后台任务送回的全部结果
//!         dispatch(msg)
//!     }
//!     if 距上次 Tick ≥ TICK_RATE {                    // 加载动画时钟
//!         dispatch(AppMessage::Tick)
//!     }
//!     if let Some(event) = poll_event(剩余时间) {     // 最多等到下一次 Tick
//!         dispatch(handle_event(event, &app))
//!     }
//! }
//!
//! dispatch(msg) = executor.execute(update::update(&mut app, msg))
//!
//! update 从不阻塞；Provider 调用全部在 tokio 任务里完成，
//! 结果经 mpsc 通道回到这里，再走一遍 update。
//!

use std::time::Instant;

use anyhow::Result;
use tokio::sync::mpsc::UnboundedReceiver;

use crate::backend::ProviderService;
use crate::event;
use crate::message::AppMessage;
use crate::model::{App, TICK_RATE};
use crate::update;
use crate::util::Term;
use crate::view;

/// 运行应用主循环
pub fn run(
    terminal: &mut Term,
    app: &mut App,
    executor: &ProviderService,
    rx: &mut UnboundedReceiver<AppMessage>,
) -> Result<()> {
    let size = terminal.size()?;
    dispatch(app, executor, AppMessage::Resize(size.width, size.height));

    let command = update::init(app);
    executor.execute(command);

    let mut last_tick = Instant::now();

    loop {
        // 1. 渲染 UI
        terminal.draw(|frame| view::render(app, frame))?;

        // 2. 检查是否应该退出
        if app.should_quit {
            log::info!("Quit requested");
            break;
        }

        // 3. 后台任务的结果
        while let Ok(msg) = rx.try_recv() {
            dispatch(app, executor, msg);
        }

        // 4. 动画时钟
        if last_tick.elapsed() >= TICK_RATE {
            dispatch(app, executor, AppMessage::Tick);
            last_tick = Instant::now();
        }

        // 5. 轮询事件，最多等到下一次 Tick
        let timeout = TICK_RATE.saturating_sub(last_tick.elapsed());
        if let Some(event) = event::poll_event(timeout)? {
            let msg = event::handle_event(event, app);
            dispatch(app, executor, msg);
        }
    }

    Ok(())
}

/// 更新状态并执行返回的命令
fn dispatch(app: &mut App, executor: &ProviderService, msg: AppMessage) {
    let command = update::update(app, msg);
    executor.execute(command);
}
