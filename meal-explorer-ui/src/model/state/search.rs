//! 搜索输入状态

/// 两个搜索框当前的输入值（原样保存，使用时再 trim）
#[derive(Debug, Clone, Default)]
pub struct SearchState {
    pub name_query: String,
    pub letter_query: String,
}

impl SearchState {
    pub fn new() -> Self {
        Self::default()
    }

    /// 清空两个输入框
    pub fn clear(&mut self) {
        self.name_query.clear();
        self.letter_query.clear();
    }
}
