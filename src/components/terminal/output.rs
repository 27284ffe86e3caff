use crate::models::{EntryKind, OutputLine, OutputLineData};
use leptos::prelude::*;

stylance::import_crate_style!(css, "src/components/terminal/output.module.css");

/// One scrollback row. Every variant renders as plain text nodes.
#[component]
pub fn Output(line: OutputLine) -> impl IntoView {
    match line.data {
        OutputLineData::Command { prompt, input } => view! {
            <div class=css::line>
                <span class=css::prompt>{prompt}</span>
                <span>{input}</span>
            </div>
        }
        .into_any(),
        OutputLineData::ListEntry { name, kind } => {
            let tag = match kind {
                EntryKind::Folder => "[DIR] ",
                EntryKind::File => "[FILE] ",
            };
            view! {
                <div class=css::line>
                    <span class=css::textDim>{tag}</span>
                    <span>{name}</span>
                </div>
            }
            .into_any()
        }
        OutputLineData::Text(text) => view! {
            <div class=css::line>{text}</div>
        }
        .into_any(),
        OutputLineData::Error(text) => view! {
            <div class=format!("{} {}", css::line, css::textRed)>{text}</div>
        }
        .into_any(),
        OutputLineData::Success(text) => view! {
            <div class=format!("{} {}", css::line, css::textGreen)>{text}</div>
        }
        .into_any(),
        OutputLineData::Info(text) => view! {
            <div class=format!("{} {}", css::line, css::textYellow)>{text}</div>
        }
        .into_any(),
    }
}
