use once_cell::sync::Lazy;
use regex_lite::Regex;
use std::borrow::Cow;

// ESC / CSI 开头的 ANSI 控制序列（颜色、光标控制、OSC 标题等）
static ANSI_ESCAPE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"[\x1b\x{9b}][\[\]()#;?]*(?:(?:(?:[a-zA-Z\d]*(?:;[a-zA-Z\d]*)*)?\x07)|(?:(?:\d{1,4}(?:;\d{0,4})*)?[\dA-PRZcf-ntqry=><~]))",
    )
    .expect("invalid ANSI escape pattern")
});

/// 去掉字符串中的 ANSI 控制序列
pub fn strip_ansi(text: &str) -> Cow<'_, str> {
    if !text.contains(['\x1b', '\u{9b}']) {
        return Cow::Borrowed(text);
    }
    ANSI_ESCAPE.replace_all(text, "")
}
