//! 名称 -> 元素ID 转换

use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

/// 将机器人名称转为可用作元素ID的字符串
/// 先做 NFD 分解并去掉附加符号（`Á` -> `a`），再转小写，空白变为 `_`，
/// 只保留 ASCII 字母数字、`-` 与 `_`
///
/// 转换不是单射：`MAIN.C` 与 `MAINC` 得到同一个ID。
/// 网格与页面状态都以名称为键，ID 只用于渲染。
pub fn name_to_id(name: &str) -> String {
    name.trim()
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
        .filter_map(|c| match c {
            c if c.is_whitespace() => Some('_'),
            c if c.is_ascii_alphanumeric() || c == '-' || c == '_' => Some(c),
            _ => None,
        })
        .collect()
}
