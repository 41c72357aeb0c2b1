use dioxus::prelude::*;

use crate::generate::Cell;

/// Letters stay invisible until a cell's `data-show` is flipped to "true"
const CELL_CSS: &str = r#"
.clue-cell { width: 64px; height: 64px; border-radius: 8px; background: #1a1a2e; border: 1px solid #2a2a4a; position: relative; display: flex; align-items: center; justify-content: center; font-family: monospace; font-size: 28px; font-weight: 700; }
.clue-cell.empty { background: #14142a; }
.clue-cell[data-show="true"]::after { content: attr(data-token); color: var(--ink); }
"#;

/// The hidden-letter grid
#[component]
pub fn CellGrid(cells: Vec<Option<Cell>>, cols: usize) -> Element {
    let grid_style = format!(
        "display: grid; grid-template-columns: repeat({cols}, 64px); gap: 8px; padding: 16px; background: #0b0b18; border: 1px solid #2a2a4a; border-radius: 12px;"
    );

    rsx! {
        style { "{CELL_CSS}" }
        div {
            id: "grid",
            style: "{grid_style}",
            for (i, cell) in cells.iter().enumerate() {
                {
                    match cell {
                        Some(cell) => {
                            let token = cell.token.to_string();
                            let ink = cell.color.to_css();
                            let show = if cell.revealed { "true" } else { "false" };
                            rsx! {
                                div {
                                    key: "{i}",
                                    class: "clue-cell",
                                    "data-index": "{i}",
                                    "data-token": "{token}",
                                    "data-color": "{ink}",
                                    "data-show": "{show}",
                                    style: "--ink: {ink};",
                                }
                            }
                        }
                        None => rsx! {
                            div {
                                key: "{i}",
                                class: "clue-cell empty",
                                "data-index": "{i}",
                            }
                        },
                    }
                }
            }
        }
    }
}
