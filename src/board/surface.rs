//! Debug surface - debug-mode switch and the `window.__clues` object
//!
//! `window.__clues` only ever sees the masked snapshot from
//! `Diagnostics::to_json`; the words stay on the Rust side. Anything the
//! snapshot cannot answer is sent back over the eval channel.

use dioxus::prelude::*;
use dioxus::core::Task;
use serde_json::Value;
use tracing::warn;

use crate::config::{DEBUG_KEY, DEBUG_PARAM, debug_enabled};
use crate::game::{DecodeReply, Request};
use super::browser;

const DEBUG_MODE_JS: &str = r#"
    if (!window.__clueDebugInstalled) {
        window.__clueDebugInstalled = true;
        const style = document.createElement('style');
        style.textContent = '#diagnostics{display:none;} body[data-debug="true"] #diagnostics{display:block;}';
        document.head.appendChild(style);

        window.__setDebugMode = (enabled) => {
            const isEnabled = !!enabled;
            document.body.dataset.debug = isEnabled ? 'true' : 'false';
            try { localStorage.setItem('__KEY__', isEnabled ? '1' : '0'); } catch {}
        };
    }
    window.__setDebugMode(__ENABLED__);
"#;

const CLUES_JS: &str = r#"
    (() => {
        const data = __DATA__;
        const mapping = data.mapping.map(m => Object.freeze({ index: m.index, start: m.start, len: m.len }));
        const pending = new Map();
        let nextId = 0;
        window.__clues = Object.freeze({
            seed: data.seed,
            mapping() { return mapping.map(m => ({ ...m })); },
            hint(i) {
                const m = mapping[i];
                if (m) return { ...m };
                dioxus.send({ op: 'hint', index: i });
                return null;
            },
            decode(hex, key) {
                const id = nextId++;
                return new Promise(resolve => {
                    pending.set(id, resolve);
                    dioxus.send({ op: 'decode', id, hex: String(hex), key: String(key ?? '') });
                });
            },
        });
        (async () => {
            while (true) {
                const reply = await dioxus.recv();
                pending.get(reply.id)?.(reply.text);
                pending.delete(reply.id);
            }
        })();
    })();
"#;

/// Apply the debug flag from `?debug=` or the remembered choice
pub fn install_debug_mode() {
    let enabled = debug_enabled(
        browser::query_param(DEBUG_PARAM).as_deref(),
        browser::local_item(DEBUG_KEY).as_deref(),
    );
    let js = DEBUG_MODE_JS
        .replace("__KEY__", DEBUG_KEY)
        .replace("__ENABLED__", if enabled { "true" } else { "false" });
    document::eval(&js);
}

/// Replace `window.__clues` with a fresh masked snapshot.
///
/// The returned task answers the object's forwarded lookups with `answer`
/// until it is cancelled; cancel it before publishing the next snapshot.
pub fn publish(
    snapshot_json: &str,
    mut answer: impl FnMut(Request) -> Option<DecodeReply> + 'static,
) -> Task {
    let mut eval = document::eval(&CLUES_JS.replace("__DATA__", snapshot_json));
    spawn(async move {
        while let Ok(raw) = eval.recv::<Value>().await {
            let request = match serde_json::from_value::<Request>(raw) {
                Ok(request) => request,
                Err(err) => {
                    warn!(%err, "ignoring malformed __clues request");
                    continue;
                }
            };
            if let Some(reply) = answer(request) {
                if let Err(err) = eval.send(reply) {
                    warn!(?err, "failed to answer __clues decode");
                }
            }
        }
    })
}
