use web_sys::Document;

use crate::api::HubClient;
use crate::render::assignment_cards_html;

/// Fills `.assignments-container` once the list arrives. On failure the
/// container keeps whatever it had.
pub(super) fn load_assignments(document: &Document, client: HubClient) {
    let container = match document.query_selector(".assignments-container") {
        Ok(Some(container)) => container,
        _ => return,
    };
    wasm_bindgen_futures::spawn_local(async move {
        match client.assignments().await {
            Ok(assignments) => {
                log::debug!("Rendering {} assignments", assignments.len());
                container.set_inner_html(&assignment_cards_html(&assignments));
            }
            Err(e) => log::error!("Error loading assignments: {:#}", e),
        }
    });
}
