use anyhow::Result;
use gloo_timers::callback::Interval;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event, HtmlElement, HtmlSelectElement, NodeList};

use super::{document, go, js_error, listen};
use crate::binder::{InboxRefresh, ModalState, ModalTarget};
use crate::config::HubConfig;
use crate::popup::Subscription;
use crate::render::{CALENDAR_CELL_HOVER, CALENDAR_CELL_REST};
use crate::routes::{course_url, inbox_url, View, NAV_BUTTONS};

const SENDER_SELECT_ID: &str = "senderSelect";
const VIDEO_TRIGGER_ID: &str = "recommend-videos";
const VIDEO_MODAL_ID: &str = "videoRecommendModal";

pub(super) fn elements(list: &NodeList) -> impl Iterator<Item = Element> + '_ {
    (0..list.length())
        .filter_map(move |i| list.get(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
}

fn set_style(element: &Element, property: &str, value: &str) {
    if let Some(html) = element.dyn_ref::<HtmlElement>() {
        let _ = html.style().set_property(property, value);
    }
}

pub(super) fn bind_nav_buttons(document: &Document, listeners: &mut Vec<Subscription>) -> Result<()> {
    for (id, route) in NAV_BUTTONS {
        let Some(button) = document.get_element_by_id(id) else {
            log::debug!("No #{} on this page", id);
            continue;
        };
        let path = route.path();
        listeners.push(listen(&button, "click", move |_| go(path))?);
    }
    Ok(())
}

pub(super) fn bind_sender_select(document: &Document, listeners: &mut Vec<Subscription>) -> Result<()> {
    let Some(select) = document
        .get_element_by_id(SENDER_SELECT_ID)
        .and_then(|el| el.dyn_into::<HtmlSelectElement>().ok())
    else {
        return Ok(());
    };
    let source = select.clone();
    listeners.push(listen(&select, "change", move |_| go(&inbox_url(&source.value())))?);
    Ok(())
}

pub(super) fn bind_class_buttons(document: &Document, listeners: &mut Vec<Subscription>) -> Result<()> {
    let buttons = document.query_selector_all(".class-button").map_err(js_error)?;
    for button in elements(&buttons) {
        let Some(course_id) = button.get_attribute("data-course-id") else {
            log::warn!("Class button without data-course-id");
            continue;
        };
        let url = course_url(&course_id);
        listeners.push(listen(&button, "click", move |_| go(&url))?);
    }
    Ok(())
}

fn classify_modal_click(modal: &Element, event: &Event) -> ModalTarget {
    let Some(target) = event.target().and_then(|t| t.dyn_into::<Element>().ok()) else {
        return ModalTarget::Content;
    };
    if modal.is_same_node(Some(target.as_ref())) {
        return ModalTarget::Backdrop;
    }
    let within = |selector: &str| matches!(target.closest(selector), Ok(Some(_)));
    if within(".close-modal") {
        ModalTarget::CloseControl
    } else if within("#user-prompt-option") {
        ModalTarget::UserPrompt
    } else if within("#assignments-option") {
        ModalTarget::Assignments
    } else {
        ModalTarget::Content
    }
}

/// Binds the video modal once. Opening it again only flips visibility.
pub(super) fn bind_video_modal(document: &Document, listeners: &mut Vec<Subscription>) -> Result<()> {
    let Some(trigger) = document.get_element_by_id(VIDEO_TRIGGER_ID) else {
        return Ok(());
    };
    let Some(modal) = document.get_element_by_id(VIDEO_MODAL_ID) else {
        log::warn!("#{} present without #{}", VIDEO_TRIGGER_ID, VIDEO_MODAL_ID);
        return Ok(());
    };
    let state = Rc::new(RefCell::new(ModalState::default()));

    let (open_state, open_modal) = (state.clone(), modal.clone());
    listeners.push(listen(&trigger, "click", move |_| {
        open_state.borrow_mut().open();
        set_style(&open_modal, "display", "block");
    })?);

    let scope = modal.clone();
    listeners.push(listen(&modal, "click", move |event| {
        let target = classify_modal_click(&scope, &event);
        let outcome = state.borrow_mut().handle(target);
        if let Some(route) = outcome.navigate {
            go(route.path());
        }
        if outcome.hide {
            set_style(&scope, "display", "none");
        }
    })?);
    Ok(())
}

pub(super) fn bind_calendar(document: &Document, listeners: &mut Vec<Subscription>) -> Result<()> {
    if document.query_selector(".calendar").map_err(js_error)?.is_none() {
        return Ok(());
    }

    let cells = document.query_selector_all(".day .assignment").map_err(js_error)?;
    for cell in elements(&cells) {
        let entered = cell.clone();
        listeners.push(listen(&cell, "mouseenter", move |_| {
            set_style(&entered, "background", CALENDAR_CELL_HOVER)
        })?);
        let left = cell.clone();
        listeners.push(listen(&cell, "mouseleave", move |_| {
            set_style(&left, "background", CALENDAR_CELL_REST)
        })?);
    }

    let assignments = document.query_selector_all(".assignment").map_err(js_error)?;
    for assignment in elements(&assignments) {
        set_style(&assignment, "cursor", "pointer");
    }
    Ok(())
}

fn current_sender() -> Option<String> {
    document()
        .ok()?
        .get_element_by_id(SENDER_SELECT_ID)?
        .dyn_into::<HtmlSelectElement>()
        .ok()
        .map(|select| select.value())
}

/// Starts the inbox refresh timer when `view` wants one. The timer stops
/// when the returned handle is dropped.
pub(super) fn start_inbox_refresh(view: View, config: &HubConfig) -> Option<Interval> {
    let refresh = InboxRefresh::for_view(view, config)?;
    log::debug!("Refreshing inbox every {} ms", refresh.interval_ms);
    Some(Interval::new(refresh.interval_ms, move || {
        if let Some(url) = refresh.tick(current_sender().as_deref()) {
            go(&url);
        }
    }))
}
