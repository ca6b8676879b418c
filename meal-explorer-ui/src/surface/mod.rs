//! 宿主界面
//!
//! 主循环把每次渲染出的 [`Document`] 交给宿主展示，提示文本通过 `alert` 弹出。

mod headless;

pub use headless::HeadlessSurface;

use std::path::PathBuf;

use thiserror::Error;

use crate::view::Document;

/// 宿主界面错误
#[derive(Debug, Error)]
pub enum SurfaceError {
    #[error("写入页面失败 {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// 宿主界面
pub trait Surface {
    /// 展示最新的文档（整体替换）
    fn present(&mut self, document: &Document) -> Result<(), SurfaceError>;

    /// 弹出提示
    fn alert(&mut self, message: &str) -> Result<(), SurfaceError>;
}
