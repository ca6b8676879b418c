//! HTML 文本工具

/// 转义后追加到输出缓冲区（文本与属性值共用）
pub fn escape_into(out: &mut String, s: &str) {
    for c in s.chars() {
        match c {
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '&' => out.push_str("&amp;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
}

/// 转义文本
pub fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    escape_into(&mut out, s);
    out
}

/// [`escape`] 的逆操作，用于从渲染结果中读回属性值
pub fn unescape(s: &str) -> String {
    if !s.contains('&') {
        return s.to_string();
    }
    s.replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&amp;", "&")
}

/// 描述预览：取前 `max_chars` 个字符并追加 `...`（缺失时只有 `...`）
pub fn preview(text: Option<&str>, max_chars: usize) -> String {
    let head: String = text.unwrap_or_default().chars().take(max_chars).collect();
    format!("{head}...")
}

/// 空状态提示段落
pub fn notice(class: &str, text: &str) -> String {
    format!(r#"<p class="{class} text-center col-span-full">{}</p>"#, escape(text))
}
