//! Tree Select Field
//!
//! Selection input for tree-referencing fields: an autocomplete over the
//! flattened, path-labelled branches plus a modal fully-expanded tree for
//! browsing. Non-selectable branches stay visible for context but are
//! rejected on pick.

use leptos::prelude::*;

use crate::components::branch_tree_view::BranchTreeView;
use crate::components::field_inputs::FieldLabel;
use crate::models::Tree;
use crate::tree::{flatten_tree, BranchOption};

/// Simple fuzzy match: query chars must appear in order in the target
pub fn fuzzy_match(query: &str, target: &str) -> bool {
    let query = query.to_lowercase();
    let target = target.to_lowercase();

    let mut target_chars = target.chars();
    for query_char in query.chars() {
        loop {
            match target_chars.next() {
                Some(c) if c == query_char => break,
                Some(_) => continue,
                None => return false,
            }
        }
    }
    true
}

#[component]
pub fn TreeSelectField(
    #[prop(into)] label: String,
    tree: Signal<Tree>,
    value: Signal<Option<u32>>,
    #[prop(into)] on_change: Callback<Option<u32>>,
    #[prop(optional)] required: bool,
) -> impl IntoView {
    let (query, set_query) = signal(String::new());
    let (list_open, set_list_open) = signal(false);
    let (selected_idx, set_selected_idx) = signal(0usize);
    let (modal_open, set_modal_open) = signal(false);

    let options = Memo::new(move |_| flatten_tree(&tree.get()));

    let suggestions = move || {
        let q = query.get();
        if q.trim().is_empty() {
            return vec![];
        }
        options
            .get()
            .into_iter()
            .filter(|opt| fuzzy_match(q.trim(), &opt.path_label))
            .take(8)
            .collect::<Vec<_>>()
    };

    let selected_label = move || {
        let id = value.get()?;
        options.get().into_iter().find(|o| o.branch.id_branch == id).map(|o| o.path_label)
    };

    let pick = move |option: &BranchOption| {
        if !option.is_selectable {
            web_sys::console::log_1(
                &format!("[TREE] branch {} is not selectable", option.branch.id_branch).into(),
            );
            return;
        }
        on_change.run(Some(option.branch.id_branch));
        set_query.set(String::new());
        set_list_open.set(false);
        set_selected_idx.set(0);
        set_modal_open.set(false);
    };

    let on_keydown = move |ev: web_sys::KeyboardEvent| {
        let sugg = suggestions();
        match ev.key().as_str() {
            "ArrowDown" => {
                ev.prevent_default();
                let sel = selected_idx.get();
                if sel + 1 < sugg.len() {
                    set_selected_idx.set(sel + 1);
                }
            }
            "ArrowUp" => {
                ev.prevent_default();
                let sel = selected_idx.get();
                if sel > 0 {
                    set_selected_idx.set(sel - 1);
                }
            }
            "Enter" => {
                ev.prevent_default();
                if let Some(option) = sugg.get(selected_idx.get()) {
                    pick(option);
                }
            }
            "Escape" => set_list_open.set(false),
            _ => {}
        }
    };

    view! {
        <div class="field tree-select-field">
            <FieldLabel label=label required=required />

            {move || selected_label().map(|path| view! {
                <div class="tree-selected">
                    <span class="tree-selected-path">{path}</span>
                    <button
                        type="button"
                        class="clear-btn"
                        on:click=move |_| on_change.run(None)
                    >
                        "×"
                    </button>
                </div>
            })}

            <div class="tree-search-row">
                <input
                    type="text"
                    placeholder="Pesquisar ramo..."
                    autocomplete="off"
                    prop:value=move || query.get()
                    on:input=move |ev| {
                        set_query.set(event_target_value(&ev));
                        set_selected_idx.set(0);
                        set_list_open.set(true);
                    }
                    on:keydown=on_keydown
                />
                <button
                    type="button"
                    class="btn"
                    title="Visualizar árvore"
                    on:click=move |_| set_modal_open.set(true)
                >
                    "⊞"
                </button>
            </div>

            {move || {
                let sugg = suggestions();
                if !list_open.get() || sugg.is_empty() {
                    view! { <div></div> }.into_any()
                } else {
                    let selected = selected_idx.get();
                    view! {
                        <div class="autocomplete-list">
                            {sugg.into_iter().enumerate().map(|(i, option)| {
                                let option_for_click = option.clone();
                                let mut class = String::from("autocomplete-item");
                                if i == selected { class.push_str(" selected"); }
                                if !option.is_selectable { class.push_str(" disabled"); }
                                view! {
                                    <button
                                        type="button"
                                        class=class
                                        on:click=move |ev| {
                                            ev.prevent_default();
                                            pick(&option_for_click);
                                        }
                                    >
                                        {option.path_label.clone()}
                                    </button>
                                }
                            }).collect_view()}
                        </div>
                    }.into_any()
                }
            }}

            // Browse modal with the whole tree expanded
            <Show when=move || modal_open.get()>
                <div class="modal-overlay" on:click=move |_| set_modal_open.set(false)>
                    <div class="modal-dialog wide" on:click=|ev| ev.stop_propagation()>
                        <div class="modal-header">
                            <h3 class="modal-title">{move || tree.get().name.clone()}</h3>
                            <button class="close-btn" on:click=move |_| set_modal_open.set(false)>
                                "×"
                            </button>
                        </div>
                        <BranchTreeView
                            branches=Signal::derive(move || tree.get().branches.clone())
                            selected=Signal::derive(move || value.get())
                            on_select=Callback::new(move |id: u32| {
                                if let Some(option) = options
                                    .get()
                                    .into_iter()
                                    .find(|o| o.branch.id_branch == id)
                                {
                                    pick(&option);
                                }
                            })
                        />
                    </div>
                </div>
            </Show>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fuzzy_match() {
        assert!(fuzzy_match("eltr", "Elétrica"));
        assert!(fuzzy_match("SET", "setores"));
        assert!(!fuzzy_match("xyz", "Elétrica"));
        assert!(fuzzy_match("", "qualquer"));
    }
}
