use dioxus::prelude::*;
use dioxus::core::Task;
use tracing::warn;

use crate::config::{GameConfig, SEED_PARAM};
use crate::game::{Feedback, Game, Phase};
use crate::seed::{Session, SessionStore, fresh_rng};
use super::status::StatusLine;
use super::{CellGrid, DiagnosticsPanel, browser, surface};

const FLASH_MS: u32 = 1800;

const INPUT_STYLE: &str = "flex: 1; padding: 10px 14px; border: 1px solid #d1d5db; border-radius: 6px; font-size: 14px; font-family: system-ui, sans-serif; outline: none; background: white; color: #111;";

/// Show a feedback line, then clear it unless something newer replaced it
fn flash(mut status: Signal<StatusLine>, feedback: Feedback) {
    let generation = status.write().show(feedback);
    spawn(async move {
        gloo_timers::future::TimeoutFuture::new(FLASH_MS).await;
        status.write().expire(generation);
    });
}

/// The puzzle page: grid, step input, passphrase input, controls
#[component]
pub fn Board() -> Element {
    let config = use_hook(GameConfig::default);

    let mut session = use_signal(move || {
        let requested = browser::query_param(SEED_PARAM);
        Session::open(SessionStore, requested.as_deref(), &mut fresh_rng(), config.seed_len)
    });
    let mut game = use_signal(move || Game::from_seed(session.peek().seed(), &config));
    let mut answer = use_signal(String::new);
    let mut passphrase = use_signal(String::new);
    let mut hint = use_signal(|| None::<String>);
    let mut status = use_signal(StatusLine::default);
    let mut lookups = use_signal(|| None::<Task>);

    // Re-publish the masked snapshot whenever the game changes
    use_effect(move || {
        let json = match game.read().diagnostics().to_json() {
            Ok(json) => json,
            Err(err) => {
                warn!(%err, "failed to serialize diagnostics");
                return;
            }
        };
        if let Some(previous) = lookups.take() {
            previous.cancel();
        }
        let task = surface::publish(&json, move |request| game.peek().diagnostics().handle(request));
        lookups.set(Some(task));
    });

    let on_submit = move |_| {
        let typed = answer.peek().clone();
        let feedback = game.write().submit(&typed);
        if feedback.is_success() {
            answer.set(String::new());
            hint.set(None);
        }
        flash(status, feedback);
    };

    let on_hint = move |_| {
        let current = game.peek().current_hint();
        match current {
            Some(h) => hint.set(Some(h.describe())),
            None => flash(status, Feedback::Locked),
        }
    };

    let on_final = move |_| {
        let typed = passphrase.peek().clone();
        let feedback = game.write().submit_final(&typed);
        flash(status, feedback);
    };

    let on_regenerate = move |_| {
        let seed = session
            .write()
            .regenerate(&mut fresh_rng(), config.seed_len)
            .to_string();
        browser::strip_query();
        game.set(Game::from_seed(&seed, &config));
        answer.set(String::new());
        passphrase.set(String::new());
        hint.set(None);
        status.write().clear();
    };

    let g = game.read();
    let phase = g.phase();
    let clue_count = g.clue_count();
    let cells = g.grid().cells().to_vec();
    let cols = g.grid().cols();
    let diag = g.diagnostics();
    let seed = diag.seed().to_string();
    let hash = diag.hash();
    let phase_name = diag.phase().to_string();
    let mapping = diag.mapping();
    drop(g);
    let source = session.read().source().to_string();

    let progress = match phase {
        Phase::Playing { step } => format!("clue {step} of {clue_count}"),
        Phase::Final => "passphrase".to_string(),
        Phase::Solved => "solved".to_string(),
    };
    let playing = matches!(phase, Phase::Playing { .. });
    let final_open = phase == Phase::Final;
    let solved = phase == Phase::Solved;

    let status_line = status().feedback().map(|f| (f.message(), if f.is_success() { "#22c55e" } else { "#ef4444" }));
    let hint_line = hint();
    let final_opacity = if final_open { "1" } else { "0.4" };

    rsx! {
        div {
            style: "min-height: 100vh; background: #0f0f1a; display: flex; flex-direction: column; align-items: center; padding: 20px; font-family: system-ui, sans-serif;",

            div {
                style: "display: flex; gap: 16px; align-items: center; margin-bottom: 16px;",
                h2 {
                    style: "color: #e5e7eb; margin: 0; font-size: 20px;",
                    "Clue Grid"
                }
                span {
                    style: "color: #6b7280; font-size: 14px;",
                    "Find the hidden words"
                }
                span {
                    style: "color: #22c55e; font-size: 14px; font-family: monospace;",
                    "{progress}"
                }
                span {
                    style: "color: #6b7280; font-size: 12px; font-family: monospace;",
                    "seed: {seed}"
                }
            }

            CellGrid { cells: cells, cols: cols }

            div {
                style: "width: 640px; display: flex; flex-direction: column; gap: 10px; margin-top: 16px;",

                div {
                    style: "display: flex; gap: 8px;",
                    input {
                        r#type: "text",
                        style: "{INPUT_STYLE}",
                        placeholder: "Answer for this clue",
                        disabled: !playing,
                        value: "{answer}",
                        oninput: move |e: Event<FormData>| answer.set(e.value()),
                    }
                    button {
                        style: "padding: 10px 18px; background: #4f46e5; color: white; border: none; border-radius: 6px; font-size: 14px; font-weight: 600; cursor: pointer;",
                        disabled: !playing,
                        onclick: on_submit,
                        "Submit"
                    }
                    button {
                        style: "padding: 10px 18px; background: #374151; color: white; border: none; border-radius: 6px; font-size: 14px; cursor: pointer;",
                        disabled: !playing,
                        onclick: on_hint,
                        "Hint"
                    }
                }

                div {
                    style: "display: flex; gap: 8px; opacity: {final_opacity};",
                    input {
                        r#type: "text",
                        style: "{INPUT_STYLE}",
                        placeholder: "WORD-WORD-...",
                        disabled: !final_open,
                        value: "{passphrase}",
                        oninput: move |e: Event<FormData>| passphrase.set(e.value()),
                    }
                    button {
                        style: "padding: 10px 18px; background: #16a34a; color: white; border: none; border-radius: 6px; font-size: 14px; font-weight: 600; cursor: pointer;",
                        disabled: !final_open,
                        onclick: on_final,
                        "Unlock"
                    }
                }

                div {
                    style: "display: flex; gap: 12px; align-items: center; min-height: 24px;",
                    button {
                        style: "padding: 6px 14px; background: transparent; color: #9ca3af; border: 1px solid #374151; border-radius: 6px; font-size: 13px; cursor: pointer;",
                        onclick: on_regenerate,
                        "New seed"
                    }
                    if let Some((message, color)) = status_line {
                        span { style: "color: {color}; font-size: 14px;", "{message}" }
                    }
                    if let Some(text) = hint_line {
                        span { style: "color: #f59e0b; font-size: 13px; font-family: monospace;", "{text}" }
                    }
                }

                if solved {
                    div {
                        style: "padding: 16px; background: linear-gradient(135deg, #22c55e, #16a34a); color: white; border-radius: 8px; font-size: 18px; font-weight: 600; text-align: center;",
                        "Solved! Every clue found."
                    }
                }
            }

            DiagnosticsPanel {
                seed: seed.clone(),
                source: source,
                hash: hash,
                phase: phase_name,
                mapping: mapping,
            }
        }
    }
}
