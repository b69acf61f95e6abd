use crate::shared::config::FormsConfig;
use crate::usecases::u101_add_box::AddBoxForm;
use crate::usecases::u102_add_can::AddCanForm;
use leptos::prelude::*;
use thaw::ConfigProvider;

/// Форма, которую надо смонтировать на текущей странице
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormPage {
    AddBox,
    AddCan,
}

impl FormPage {
    pub fn from_path(path: &str) -> Option<Self> {
        let path = path.trim_end_matches('/');
        if path.ends_with("add_box") {
            Some(FormPage::AddBox)
        } else if path.ends_with("add_can") {
            Some(FormPage::AddCan)
        } else {
            None
        }
    }

    fn current() -> Option<Self> {
        let path = web_sys::window()?.location().pathname().ok()?;
        let page = Self::from_path(&path);
        if page.is_none() {
            log::warn!("No data-entry form for {}", path);
        }
        page
    }
}

#[component]
pub fn App() -> impl IntoView {
    let config = FormsConfig::load();

    let form = match FormPage::current() {
        Some(FormPage::AddBox) => view! { <AddBoxForm config=config /> }.into_any(),
        Some(FormPage::AddCan) => view! { <AddCanForm config=config /> }.into_any(),
        None => ().into_any(),
    };

    view! {
        <ConfigProvider>
            {form}
        </ConfigProvider>
    }
}
