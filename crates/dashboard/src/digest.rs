use futdash_core::news::entity::NewsArticle;

/// # Summary
/// 拼装送入摘要模型的原文。
///
/// # Logic
/// 1. 每条新闻取 "标题. 描述"，缺失字段跳过。
/// 2. 各条之间以单个空格连接。
/// 3. 超过 `max_chars` 时按字符截断，并尽量回退到最近的单词边界。
///
/// # Arguments
/// * `articles`: 新闻列表。
/// * `max_chars`: 模型输入上限 (字符数)。
///
/// # Returns
/// 拼装后的文本，无可用内容时为空串。
pub fn build_summary_input(articles: &[NewsArticle], max_chars: usize) -> String {
    let text = articles
        .iter()
        .filter_map(article_text)
        .collect::<Vec<_>>()
        .join(" ");

    truncate_chars(&text, max_chars)
}

fn article_text(article: &NewsArticle) -> Option<String> {
    let title = non_blank(article.title.as_deref());
    let description = non_blank(article.description.as_deref());

    match (title, description) {
        (Some(t), Some(d)) => Some(format!("{} {}", terminate(t), d)),
        (Some(t), None) => Some(terminate(t)),
        (None, Some(d)) => Some(d.to_string()),
        (None, None) => None,
    }
}

fn non_blank(s: Option<&str>) -> Option<&str> {
    s.map(str::trim).filter(|s| !s.is_empty())
}

// 标题通常不带句末标点
fn terminate(sentence: &str) -> String {
    if sentence.ends_with(['.', '!', '?']) {
        sentence.to_string()
    } else {
        format!("{}.", sentence)
    }
}

/// # Summary
/// 在字符边界上截断文本。
///
/// # Logic
/// 1. 未超限原样返回。
/// 2. 取前 `max_chars` 个字符。
/// 3. 若截断点落在单词中间且前面存在空白，则回退到该空白处。
fn truncate_chars(text: &str, max_chars: usize) -> String {
    let Some((cut, _)) = text.char_indices().nth(max_chars) else {
        return text.to_string();
    };

    let head = &text[..cut];
    let mid_word = !text[cut..].starts_with(char::is_whitespace);
    let head = match head.rfind(char::is_whitespace) {
        Some(ws) if mid_word && ws > 0 => &head[..ws],
        _ => head,
    };
    head.trim_end().to_string()
}
