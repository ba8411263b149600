/// Blocking browser alert
pub fn show_alert(message: &str) {
    gloo::dialogs::alert(message);
}
