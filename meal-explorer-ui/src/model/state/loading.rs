//! 全局加载指示器状态

/// 加载遮罩
///
/// 发起请求前显示；任一请求结束后延迟一小段时间隐藏。
#[derive(Debug, Clone, Copy, Default)]
pub struct LoadingState {
    visible: bool,
}

impl LoadingState {
    pub fn show(&mut self) {
        self.visible = true;
    }

    pub fn hide(&mut self) {
        self.visible = false;
    }

    pub fn is_visible(self) -> bool {
        self.visible
    }
}
