use anyhow::{Context, Result};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event, KeyboardEvent, Node};

use super::binder::elements;
use super::{js_error, listen, release_later};
use crate::api::HubClient;
use crate::models::{AssignmentDetails, Id};
use crate::popup::{dismisses_on_click, dismisses_on_key, PopupId, PopupNode, PopupSlot, Subscription};
use crate::render::{detail_card_html, POPUP_CLASS, POPUP_CLOSE_CLASS};

pub(super) struct PopupElement(Element);

impl PopupNode for PopupElement {
    fn remove(&self) {
        self.0.remove();
    }
}

type Slot = Rc<RefCell<PopupSlot<PopupElement>>>;

pub(super) fn bind_assignment_triggers(
    document: &Document,
    client: &HubClient,
    slot: &Slot,
    listeners: &mut Vec<Subscription>,
) -> Result<()> {
    let triggers = document.query_selector_all(".assignment").map_err(js_error)?;
    for trigger in elements(&triggers) {
        let (Some(course_id), Some(assignment_id)) = (
            trigger.get_attribute("data-course-id"),
            trigger.get_attribute("data-assignment-id"),
        ) else {
            continue;
        };
        let course_id = Id::from(course_id.as_str());
        let assignment_id = Id::from(assignment_id.as_str());
        let (client, slot, source) = (client.clone(), slot.clone(), trigger.clone());

        listeners.push(listen(&trigger, "click", move |event: Event| {
            // Keep this click away from the outside-click listener of a popup
            // that is already open.
            event.stop_propagation();
            let (client, slot, source) = (client.clone(), slot.clone(), source.clone());
            let (course_id, assignment_id) = (course_id.clone(), assignment_id.clone());
            wasm_bindgen_futures::spawn_local(async move {
                match client.assignment_details(&course_id, &assignment_id).await {
                    Ok(details) => {
                        if let Err(e) = show_popup(&slot, &source, &details) {
                            log::error!("Error showing assignment details: {:#}", e);
                        }
                    }
                    Err(e) => log::error!("Error fetching assignment details: {:#}", e),
                }
            });
        })?);
    }
    Ok(())
}

fn dismiss(slot: &Slot, id: PopupId) {
    let released = slot.borrow_mut().dismiss(id);
    if let Some(subscriptions) = released {
        release_later(subscriptions);
    }
}

fn event_node(event: &Event) -> Option<Node> {
    event.target().and_then(|t| t.dyn_into::<Node>().ok())
}

fn show_popup(slot: &Slot, trigger: &Element, details: &AssignmentDetails) -> Result<()> {
    let document = super::document()?;
    let body = document.body().context("No document body")?;

    let popup = document.create_element("div").map_err(js_error)?;
    popup.set_class_name(POPUP_CLASS);
    popup.set_inner_html(&detail_card_html(details));
    body.append_child(&popup).map_err(js_error)?;

    let id = slot.borrow_mut().show(PopupElement(popup.clone()));

    let mut subscriptions = Vec::with_capacity(3);
    if let Some(close) = popup
        .query_selector(&format!(".{}", POPUP_CLOSE_CLASS))
        .map_err(js_error)?
    {
        let slot = slot.clone();
        subscriptions.push(listen(&close, "click", move |_| dismiss(&slot, id))?);
    }

    {
        let (slot, popup, trigger) = (slot.clone(), popup.clone(), trigger.clone());
        subscriptions.push(listen(&document, "click", move |event| {
            let target = event_node(&event);
            let inside = popup.contains(target.as_ref());
            let on_trigger = trigger.contains(target.as_ref());
            if dismisses_on_click(inside, on_trigger) {
                dismiss(&slot, id);
            }
        })?);
    }

    {
        let slot = slot.clone();
        subscriptions.push(listen(&document, "keydown", move |event| {
            let escape = event
                .dyn_ref::<KeyboardEvent>()
                .map(|key| dismisses_on_key(&key.key()))
                .unwrap_or(false);
            if escape {
                dismiss(&slot, id);
            }
        })?);
    }

    let mut slot = slot.borrow_mut();
    for subscription in subscriptions {
        slot.attach(id, subscription);
    }
    log::debug!("Showing details for {}", details.name);
    Ok(())
}
