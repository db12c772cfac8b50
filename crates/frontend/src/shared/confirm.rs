/// Подтверждение разрушительного действия через браузерный confirm.
///
/// Acts as a suspension point in the calling flow: the caller proceeds only
/// when this returns `true`.
pub fn confirm(prompt: &str) -> bool {
    if let Some(win) = web_sys::window() {
        win.confirm_with_message(prompt).unwrap_or(false)
    } else {
        false
    }
}
