//! Form Exporter Component
//!
//! User information form whose fields can be downloaded as a spreadsheet.

use leptos::html;
use leptos::prelude::*;
use reactive_stores::Store;
use wasm_bindgen::JsCast;

use crate::browser::{download_bytes, selected_file_name};
use crate::config::use_config;
use crate::export::{build_workbook, can_export, export_rows, XLSX_MIME};
use crate::models::{FormRecord, FormRecordStoreFields};

#[component]
pub fn FormExporter() -> impl IntoView {
    let config = use_config();

    let form = Store::new(FormRecord::default());
    let (export_error, set_export_error) = signal(None::<String>);
    let file_input = NodeRef::<html::Input>::new();

    // Submission is a placeholder: the values are only logged
    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        log::info!("[FormExporter] Form submitted: {:?}", form.get_untracked());
    };

    let open_picker = move |_| {
        if let Some(input) = file_input.get() {
            input.click();
        }
    };

    let on_file_change = move |ev: web_sys::Event| {
        let Some(input) = ev.target().and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok()) else {
            return;
        };
        // Cancelling the picker keeps the previous choice
        if let Some(name) = selected_file_name(&input) {
            log::debug!("[FormExporter] Picked file {}", name);
            *form.file_name().write() = Some(name);
        }
    };

    let export = move |_| {
        let record = form.get_untracked();
        if !can_export(&record) {
            return;
        }
        let result = build_workbook(&export_rows(&record), config.export_sheet_name)
            .and_then(|bytes| download_bytes(&bytes, config.export_file_name, XLSX_MIME));
        match result {
            Ok(()) => set_export_error.set(None),
            Err(e) => {
                log::error!("[FormExporter] Export failed: {}", e);
                set_export_error.set(Some(e.to_string()));
            }
        }
    };

    view! {
        <div class="form-card">
            <h2>"Sample User Information Form"</h2>

            <form class="user-form" on:submit=on_submit>
                <div class="form-row">
                    <input
                        type="text"
                        name="firstName"
                        placeholder="First Name"
                        required
                        prop:value=move || form.first_name().get()
                        on:input=move |ev| { *form.first_name().write() = event_target_value(&ev); }
                    />
                    <input
                        type="text"
                        name="lastName"
                        placeholder="Last Name"
                        required
                        prop:value=move || form.last_name().get()
                        on:input=move |ev| { *form.last_name().write() = event_target_value(&ev); }
                    />
                </div>

                <textarea
                    name="address"
                    placeholder="Address"
                    rows=3
                    required
                    prop:value=move || form.address().get()
                    on:input=move |ev| { *form.address().write() = event_target_value(&ev); }
                />

                <input
                    type="file"
                    accept="*/*"
                    class="hidden-file-input"
                    style="display: none;"
                    node_ref=file_input
                    on:change=on_file_change
                />
                <button type="button" class="upload-btn" on:click=open_picker>
                    {move || form.file_name().get().unwrap_or_else(|| "Upload File".to_string())}
                </button>

                <div class="form-actions">
                    <button type="submit" class="submit-btn">"Submit"</button>
                    <button
                        type="button"
                        class="export-btn"
                        disabled=move || !form.with(can_export)
                        on:click=export
                    >
                        "Export to Excel"
                    </button>
                </div>

                {move || export_error.get().map(|message| view! {
                    <p class="export-error" role="alert">{message}</p>
                })}
            </form>
        </div>
    }
}
