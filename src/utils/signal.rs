//! Ctrl-C 监听

use std::future::{Future, pending};
use std::io;
use tracing::warn;

/// 等待 Ctrl-C
pub async fn ctrl_c() {
    wait_for_interrupt(tokio::signal::ctrl_c()).await
}

/// 仅在信号真正到达时返回；监听安装失败时记录日志并一直挂起
pub async fn wait_for_interrupt<F>(signal: F)
where
    F: Future<Output = io::Result<()>>,
{
    if let Err(e) = signal.await {
        warn!("failed to listen for Ctrl-C: {}", e);
        pending::<()>().await;
    }
}
