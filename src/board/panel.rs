//! Diagnostic panel - masked mapping and the decode helper, shown in debug mode

use dioxus::prelude::*;

use crate::game::decode;
use crate::generate::MaskedPlacement;

#[component]
pub fn DiagnosticsPanel(
    seed: String,
    source: String,
    hash: u32,
    phase: String,
    mapping: Vec<MaskedPlacement>,
) -> Element {
    let mut hex_input = use_signal(String::new);
    let mut key_input = use_signal(String::new);
    let mut decoded = use_signal(String::new);

    let hash_str = format!("{hash:#010x}");
    let rows: Vec<String> = mapping
        .iter()
        .map(|m| format!("#{:<2} start {:>2}  len {}", m.step(), m.start, m.len))
        .collect();

    let run_decode = move |_| {
        let result = decode(&hex_input.peek(), &key_input.peek());
        decoded.set(match result {
            Ok(text) => text,
            Err(err) => format!("error: {err}"),
        });
    };

    rsx! {
        div {
            id: "diagnostics",
            style: "width: 640px; background: #111827; border-radius: 8px; padding: 16px; margin-top: 16px; font-family: monospace; font-size: 12px; color: #9ca3af;",
            h3 {
                style: "margin: 0 0 8px 0; color: #e5e7eb; font-size: 13px;",
                "Diagnostics"
            }
            div { style: "padding: 4px 0;", "seed: {seed} ({source})" }
            div { style: "padding: 4px 0; color: #6b7280;", "hash: {hash_str}" }
            div { style: "padding: 4px 0; color: #6b7280;", "phase: {phase}" }
            for row in rows.iter() {
                div { style: "padding: 2px 0; color: #6b7280; white-space: pre;", "{row}" }
            }
            div {
                style: "display: flex; gap: 6px; margin-top: 10px;",
                input {
                    r#type: "text",
                    placeholder: "hex",
                    style: "flex: 2; padding: 6px; background: #0f0f1a; color: #e5e7eb; border: 1px solid #374151; border-radius: 4px; font-family: monospace;",
                    value: "{hex_input}",
                    oninput: move |e: Event<FormData>| hex_input.set(e.value()),
                }
                input {
                    r#type: "text",
                    placeholder: "key",
                    style: "flex: 1; padding: 6px; background: #0f0f1a; color: #e5e7eb; border: 1px solid #374151; border-radius: 4px; font-family: monospace;",
                    value: "{key_input}",
                    oninput: move |e: Event<FormData>| key_input.set(e.value()),
                }
                button {
                    style: "padding: 6px 12px; background: #374151; color: #e5e7eb; border: none; border-radius: 4px; cursor: pointer;",
                    onclick: run_decode,
                    "Decode"
                }
            }
            if !decoded.read().is_empty() {
                div { style: "padding: 6px 0; color: #e5e7eb;", "{decoded}" }
            }
        }
    }
}
