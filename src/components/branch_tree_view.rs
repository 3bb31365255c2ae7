//! Branch Tree View Component
//!
//! Fully-expanded recursive rendering of a branch forest with row selection.
//! Used by the tree admin page and by the selector's browse modal.

use leptos::prelude::*;

use crate::models::Branch;

fn render_branches(
    branches: Vec<Branch>,
    depth: usize,
    selected: Signal<Option<u32>>,
    on_select: Callback<u32>,
) -> AnyView {
    branches
        .into_iter()
        .map(|branch| {
            let id = branch.id_branch;
            let has_children = !branch.child_branches.is_empty();
            let children = branch.child_branches.clone();
            let is_selected = move || selected.get() == Some(id);
            let row_class = move || {
                if is_selected() { "branch-row selected" } else { "branch-row" }
            };
            view! {
                <div
                    class=row_class
                    style=format!("padding-left: {}px", depth * 16)
                    on:click=move |ev| {
                        ev.stop_propagation();
                        on_select.run(id);
                    }
                >
                    <span class="branch-icon">{if has_children { "▾" } else { "•" }}</span>
                    <span class="branch-name">{branch.name.clone()}</span>
                </div>
                {render_branches(children, depth + 1, selected, on_select)}
            }
            .into_any()
        })
        .collect_view()
        .into_any()
}

#[component]
pub fn BranchTreeView(
    branches: Signal<Vec<Branch>>,
    selected: Signal<Option<u32>>,
    #[prop(into)] on_select: Callback<u32>,
) -> impl IntoView {
    view! {
        <div class="branch-tree-view">
            {move || render_branches(branches.get(), 0, selected, on_select)}
            <Show when=move || branches.get().is_empty()>
                <div class="empty-tree">"Nenhum ramo cadastrado"</div>
            </Show>
        </div>
    }
}
