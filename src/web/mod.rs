//! Browser side of the hub: binds DOM listeners and applies what the
//! platform-neutral modules decide.

mod assignments;
mod binder;
mod picker;
mod popup;

use anyhow::{anyhow, Context, Result};
use gloo_timers::callback::Interval;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Event, EventTarget, Window};

use crate::api::HubClient;
use crate::config::HubConfig;
use crate::popup::{PopupSlot, Subscription};
use crate::routes::{Route, View};

pub use picker::show_assignment_selection_dialog;

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::default());
}

pub(crate) fn js_error(value: JsValue) -> anyhow::Error {
    match value.as_string() {
        Some(message) => anyhow!(message),
        None => anyhow!("{:?}", value),
    }
}

fn to_js(error: anyhow::Error) -> JsValue {
    JsValue::from_str(&format!("{:#}", error))
}

pub(crate) fn window() -> Result<Window> {
    web_sys::window().context("No window")
}

pub(crate) fn document() -> Result<Document> {
    window()?.document().context("No document")
}

pub(crate) fn navigate(url: &str) -> Result<()> {
    window()?
        .location()
        .set_href(url)
        .map_err(js_error)
        .with_context(|| format!("Failed to navigate to {}", url))
}

/// Navigates from inside an event handler, where failures can only be
/// logged.
pub(crate) fn go(url: &str) {
    if let Err(e) = navigate(url) {
        log::error!("{:#}", e);
    }
}

/// Adds `handler` as a listener and returns the handle that removes it.
pub(crate) fn listen<F>(target: &EventTarget, event_type: &'static str, handler: F) -> Result<Subscription>
where
    F: FnMut(Event) + 'static,
{
    let closure = Closure::<dyn FnMut(Event)>::wrap(Box::new(handler));
    target
        .add_event_listener_with_callback(event_type, closure.as_ref().unchecked_ref())
        .map_err(js_error)
        .with_context(|| format!("Failed to listen for {}", event_type))?;
    let target = target.clone();
    Ok(Subscription::new(move || {
        let _ = target.remove_event_listener_with_callback(event_type, closure.as_ref().unchecked_ref());
        drop(closure);
    }))
}

/// Releases subscriptions after the current event dispatch returns. A
/// listener's closure cannot be freed while it is executing.
pub(crate) fn release_later(subscriptions: Vec<Subscription>) {
    if subscriptions.is_empty() {
        return;
    }
    wasm_bindgen_futures::spawn_local(async move {
        drop(subscriptions);
    });
}

/// Everything the script bound on the current page. Dropping it (or
/// calling `teardown`) removes every listener and stops the inbox refresh.
#[wasm_bindgen]
pub struct Page {
    view: View,
    listeners: Vec<Subscription>,
    refresh: Option<Interval>,
    popup: Rc<RefCell<PopupSlot<popup::PopupElement>>>,
}

#[wasm_bindgen]
impl Page {
    pub fn teardown(self) {
        if let Some(subscriptions) = self.popup.borrow_mut().close() {
            drop(subscriptions);
        }
        log::debug!(
            "Page torn down ({} listeners, refresh {})",
            self.listeners.len(),
            if self.refresh.is_some() { "stopped" } else { "inactive" }
        );
    }

    #[wasm_bindgen(getter = popupOpen)]
    pub fn popup_open(&self) -> bool {
        self.popup.borrow().is_open()
    }

    #[wasm_bindgen(getter)]
    pub fn refreshing(&self) -> bool {
        self.refresh.is_some()
    }

    #[wasm_bindgen(getter = view)]
    pub fn view_name(&self) -> String {
        format!("{:?}", self.view)
    }
}

impl Page {
    fn init() -> Result<Self> {
        let window = window()?;
        let document = window.document().context("No document")?;
        let location = window.location();
        let origin = location.origin().map_err(js_error)?;
        let pathname = location.pathname().map_err(js_error)?;

        let config = HubConfig::with_base_url(origin);
        let client = HubClient::new(config.clone());
        let view = View::from_path(&pathname);
        let popup = Rc::new(RefCell::new(PopupSlot::new()));

        let mut listeners = Vec::new();
        binder::bind_nav_buttons(&document, &mut listeners)?;
        binder::bind_sender_select(&document, &mut listeners)?;
        binder::bind_class_buttons(&document, &mut listeners)?;
        binder::bind_video_modal(&document, &mut listeners)?;
        binder::bind_calendar(&document, &mut listeners)?;
        popup::bind_assignment_triggers(&document, &client, &popup, &mut listeners)?;

        let refresh = binder::start_inbox_refresh(view, &config);
        if view == View::Assignments {
            assignments::load_assignments(&document, client);
        }

        log::info!(
            "Student hub ready on {} ({:?}, {} listeners)",
            pathname,
            view,
            listeners.len()
        );
        Ok(Self {
            view,
            listeners,
            refresh,
            popup,
        })
    }
}

/// Binds every listener for the current page. Call once after the DOM is
/// ready and keep the returned handle for as long as the page lives.
#[wasm_bindgen(js_name = initPage)]
pub fn init_page() -> Result<Page, JsValue> {
    Page::init().map_err(to_js)
}

/// Sends the browser to the assignments page, alerting if that fails.
#[wasm_bindgen(js_name = createHomeworkDoc)]
pub fn open_assignments_page() {
    if let Err(e) = navigate(Route::Assignments.path()) {
        log::error!("Error: {:#}", e);
        if let Ok(window) = window() {
            let _ = window.alert_with_message(&format!("Error: {}", e));
        }
    }
}

#[wasm_bindgen(js_name = updateCalendar)]
pub fn update_calendar(year: i32, month: u32) {
    let origin = match window().and_then(|w| w.location().origin().map_err(js_error)) {
        Ok(origin) => origin,
        Err(e) => {
            log::error!("Calendar update skipped: {:#}", e);
            return;
        }
    };
    let client = HubClient::new(HubConfig::with_base_url(origin));
    wasm_bindgen_futures::spawn_local(async move {
        match client.calendar(year, month).await {
            Ok(data) => log::debug!(
                "Calendar {}-{:02}: {} bytes",
                year,
                month,
                data.to_string().len()
            ),
            Err(e) => log::error!("Error fetching calendar: {:#}", e),
        }
    });
}

#[wasm_bindgen(js_name = formatDate)]
pub fn format_date(input: &str) -> String {
    crate::format::format_date(input)
}
