//! 无界面宿主：在内存中保留最新文档，可选地同时写入 HTML 文件

use std::path::{Path, PathBuf};

use super::{Surface, SurfaceError};
use crate::view::Document;

#[derive(Debug, Default)]
pub struct HeadlessSurface {
    document: Option<Document>,
    alerts: Vec<String>,
    presented: usize,
    output: Option<PathBuf>,
}

impl HeadlessSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// 每次展示时把完整页面写入 `path`
    pub fn with_output(path: impl Into<PathBuf>) -> Self {
        Self {
            output: Some(path.into()),
            ..Self::default()
        }
    }

    /// 最近一次展示的文档
    pub fn document(&self) -> Option<&Document> {
        self.document.as_ref()
    }

    /// 已弹出的提示（按时间顺序）
    pub fn alerts(&self) -> &[String] {
        &self.alerts
    }

    /// 展示次数
    pub fn presented(&self) -> usize {
        self.presented
    }

    pub fn output(&self) -> Option<&Path> {
        self.output.as_deref()
    }
}

impl Surface for HeadlessSurface {
    fn present(&mut self, document: &Document) -> Result<(), SurfaceError> {
        if let Some(path) = &self.output {
            std::fs::write(path, document.to_html()).map_err(|source| SurfaceError::Write {
                path: path.clone(),
                source,
            })?;
        }
        self.document = Some(document.clone());
        self.presented += 1;
        Ok(())
    }

    fn alert(&mut self, message: &str) -> Result<(), SurfaceError> {
        log::info!("alert: {message}");
        self.alerts.push(message.to_string());
        Ok(())
    }
}
