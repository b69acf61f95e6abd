use gloo_timers::callback::Timeout;

/// Перейти на страницу `path` (полная навигация, не SPA-роутинг)
pub fn redirect_to(path: &str) {
    let Some(window) = web_sys::window() else {
        log::error!("No window object, cannot navigate to {}", path);
        return;
    };
    if let Err(e) = window.location().set_href(path) {
        log::error!("Failed to navigate to {}: {:?}", path, e);
    }
}

/// Run `before`, then navigate to `path`, once `delay_ms` has elapsed
pub fn redirect_after(delay_ms: u32, path: String, before: impl FnOnce() + 'static) {
    Timeout::new(delay_ms, move || {
        before();
        redirect_to(&path);
    })
    .forget();
}
