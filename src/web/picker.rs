use anyhow::{Context, Result};
use js_sys::{Function, Promise, JSON};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use web_sys::{Element, NodeList};

use super::binder::elements;
use super::{document, js_error, listen, release_later, to_js};
use crate::models::Assignment;
use crate::popup::Subscription;
use crate::render::{assignment_picker_html, PICKER_CLASS, PICKER_ITEM_CLASS};

/// Shows a dialog listing `assignments` and resolves with the index of the
/// one clicked.
#[wasm_bindgen(js_name = showAssignmentSelectionDialog)]
pub fn show_assignment_selection_dialog(assignments: JsValue) -> Result<Promise, JsValue> {
    select_assignment(&assignments).map_err(to_js)
}

fn select_assignment(assignments: &JsValue) -> Result<Promise> {
    let json: String = JSON::stringify(assignments).map_err(js_error)?.into();
    let assignments: Vec<Assignment> =
        serde_json::from_str(&json).context("Expected an array of assignments")?;

    let document = document()?;
    let body = document.body().context("No document body")?;
    let dialog = document.create_element("div").map_err(js_error)?;
    dialog.set_class_name(PICKER_CLASS);
    dialog.set_inner_html(&assignment_picker_html(&assignments));
    body.append_child(&dialog).map_err(js_error)?;

    let items = dialog
        .query_selector_all(&format!(".{}", PICKER_ITEM_CLASS))
        .map_err(js_error)?;

    let mut bound = Ok(());
    let promise = Promise::new(&mut |resolve, _reject| {
        bound = bind_items(&items, &dialog, resolve);
    });
    if let Err(e) = bound {
        dialog.remove();
        return Err(e);
    }
    Ok(promise)
}

fn bind_items(items: &NodeList, dialog: &Element, resolve: Function) -> Result<()> {
    let held: Rc<RefCell<Vec<Subscription>>> = Rc::default();
    for item in elements(items) {
        let Some(index) = item
            .get_attribute("data-index")
            .and_then(|raw| raw.parse::<u32>().ok())
        else {
            continue;
        };
        let (dialog, resolve, pending) = (dialog.clone(), resolve.clone(), held.clone());
        let subscription = listen(&item, "click", move |_| {
            dialog.remove();
            if let Err(e) = resolve.call1(&JsValue::NULL, &JsValue::from(index)) {
                log::error!("Assignment picker callback failed: {:#}", js_error(e));
            }
            let released: Vec<Subscription> = pending.borrow_mut().drain(..).collect();
            release_later(released);
        })?;
        held.borrow_mut().push(subscription);
    }
    Ok(())
}
