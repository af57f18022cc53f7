//! 日志预览格式化

use std::fmt::Write;

/// 名称列表日志预览
/// 格式：[name1, name2, ...] (total: N)
pub fn preview_names<S: AsRef<str>>(names: &[S], max_count: usize) -> String {
    if names.is_empty() {
        return "[empty]".to_string();
    }

    let mut result = String::from("[");
    for (idx, name) in names.iter().take(max_count).enumerate() {
        if idx > 0 {
            result.push_str(", ");
        }
        result.push_str(name.as_ref());
    }

    if names.len() > max_count {
        let _ = write!(result, ", … (total: {})", names.len());
    }
    result.push(']');

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preview_names() {
        let empty: [&str; 0] = [];
        assert_eq!(preview_names(&empty, 3), "[empty]");
        assert_eq!(preview_names(&["a", "b"], 3), "[a, b]");
        assert_eq!(preview_names(&["a", "b", "c", "d"], 2), "[a, b, … (total: 4)]");
    }
}
