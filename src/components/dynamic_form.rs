//! Dynamic Form Component
//!
//! Renders one typed control per field descriptor, dispatching on the
//! field's type code. Holds no authoritative value state: values come in
//! from the caller and every edit is reported back as (field id, value).
//!
//! Tree-referencing fields fetch their tree once per distinct tree id per
//! render session. Fetches for different trees run independently; a failure
//! scopes to the affected field only.

use std::collections::HashMap;

use leptos::prelude::*;
use leptos::task::spawn_local;
use serde_json::Value;

use crate::api;
use crate::components::date_fields::{DateField, DateTimeField, TimeField};
use crate::components::field_inputs::{CheckBoxField, TextInputField, YesNoField};
use crate::components::signature_field::SignatureField;
use crate::components::tree_select::TreeSelectField;
use crate::datetime::{coerce_bool, coerce_text, parse_date, parse_date_time, parse_time};
use crate::models::{FieldKind, TaskTypeOption, Tree};
use crate::session::{token_value, use_session};

/// One field descriptor consumed by the renderer
#[derive(Debug, Clone, PartialEq)]
pub struct FieldConfig {
    pub id: u32,
    pub name: String,
    pub type_code: u32,
    pub required: bool,
    pub id_tree: Option<u32>,
}

impl FieldConfig {
    pub fn from_option(option: &TaskTypeOption) -> FieldConfig {
        FieldConfig {
            id: option.id_ta_ty_op,
            name: option.name.clone(),
            type_code: option.id_op_ty,
            required: option.is_mandatory,
            id_tree: option.id_tree,
        }
    }
}

/// Keyed fetch slot for one referenced tree
#[derive(Debug, Clone, PartialEq)]
pub enum TreeFetch {
    Loading,
    Ready(Tree),
    Failed(String),
}

/// Claim a fetch slot. Returns true only for the first caller per tree id;
/// redundant triggers (several fields sharing a tree) see the slot occupied.
pub fn begin_fetch(slots: &mut HashMap<u32, TreeFetch>, id_tree: u32) -> bool {
    if slots.contains_key(&id_tree) {
        false
    } else {
        slots.insert(id_tree, TreeFetch::Loading);
        true
    }
}

#[component]
pub fn DynamicForm(
    fields: Signal<Vec<FieldConfig>>,
    values: Signal<HashMap<u32, Value>>,
    #[prop(into)] on_change: Callback<(u32, Value)>,
) -> impl IntoView {
    let session = use_session();
    let tree_slots: RwSignal<HashMap<u32, TreeFetch>> = RwSignal::new(HashMap::new());

    // Start one fetch per distinct referenced tree; rendering of the other
    // fields never waits on these.
    Effect::new(move |_| {
        let tree_ids: Vec<u32> = fields
            .get()
            .iter()
            .filter(|f| FieldKind::from_code(f.type_code) == FieldKind::TreeSelect)
            .filter_map(|f| f.id_tree)
            .collect();
        for id_tree in tree_ids {
            let claimed = tree_slots
                .try_update(|slots| begin_fetch(slots, id_tree))
                .unwrap_or(false);
            if !claimed {
                continue;
            }
            let token = token_value(&session);
            spawn_local(async move {
                match api::get_tree_by_id(&token, id_tree).await {
                    Ok(tree) => tree_slots.update(|slots| {
                        slots.insert(id_tree, TreeFetch::Ready(tree));
                    }),
                    Err(e) => {
                        web_sys::console::error_1(
                            &format!("[FORM] tree {} fetch failed: {}", id_tree, e).into(),
                        );
                        tree_slots.update(|slots| {
                            slots.insert(id_tree, TreeFetch::Failed(e));
                        });
                    }
                }
            });
        }
    });

    view! {
        <div class="dynamic-form">
            <For
                each=move || fields.get()
                key=|field| field.id
                children=move |field| render_field(field, values, on_change, tree_slots)
            />
        </div>
    }
}

fn render_field(
    field: FieldConfig,
    values: Signal<HashMap<u32, Value>>,
    on_change: Callback<(u32, Value)>,
    tree_slots: RwSignal<HashMap<u32, TreeFetch>>,
) -> AnyView {
    let id = field.id;
    let string_or_null = move |raw: Option<String>| match raw {
        Some(s) => Value::String(s),
        None => Value::Null,
    };

    match FieldKind::from_code(field.type_code) {
        FieldKind::YesNo => view! {
            <YesNoField
                label=field.name
                required=field.required
                value=Signal::derive(move || values.with(|m| coerce_text(m.get(&id))))
                on_change=Callback::new(move |v: String| on_change.run((id, Value::String(v))))
            />
        }
        .into_any(),

        FieldKind::DateTime => view! {
            <DateTimeField
                label=field.name
                required=field.required
                value=Signal::derive(move || values.with(|m| parse_date_time(m.get(&id))))
                on_change=Callback::new(move |raw| on_change.run((id, string_or_null(raw))))
            />
        }
        .into_any(),

        FieldKind::Date => view! {
            <DateField
                label=field.name
                required=field.required
                value=Signal::derive(move || values.with(|m| parse_date(m.get(&id))))
                on_change=Callback::new(move |raw| on_change.run((id, string_or_null(raw))))
            />
        }
        .into_any(),

        FieldKind::Time => view! {
            <TimeField
                label=field.name
                required=field.required
                value=Signal::derive(move || values.with(|m| parse_time(m.get(&id))))
                on_change=Callback::new(move |raw| on_change.run((id, string_or_null(raw))))
            />
        }
        .into_any(),

        FieldKind::Signature => view! {
            <SignatureField
                label=field.name
                required=field.required
                value=Signal::derive(move || {
                    values.with(|m| match m.get(&id) {
                        Some(Value::String(s)) if !s.is_empty() => Some(s.clone()),
                        _ => None,
                    })
                })
                on_change=Callback::new(move |raw| on_change.run((id, string_or_null(raw))))
            />
        }
        .into_any(),

        FieldKind::Checkbox => view! {
            <CheckBoxField
                label=field.name
                required=field.required
                value=Signal::derive(move || values.with(|m| coerce_bool(m.get(&id))))
                on_change=Callback::new(move |v: bool| on_change.run((id, Value::Bool(v))))
            />
        }
        .into_any(),

        // Static text, value always ignored
        FieldKind::Label => view! {
            <div class="field label-field">
                <span class="static-label">{field.name}</span>
            </div>
        }
        .into_any(),

        FieldKind::TreeSelect => render_tree_field(field, values, on_change, tree_slots),

        FieldKind::Text => view! {
            <TextInputField
                label=field.name
                required=field.required
                value=Signal::derive(move || values.with(|m| coerce_text(m.get(&id))))
                on_change=Callback::new(move |v: String| on_change.run((id, Value::String(v))))
            />
        }
        .into_any(),
    }
}

fn render_tree_field(
    field: FieldConfig,
    values: Signal<HashMap<u32, Value>>,
    on_change: Callback<(u32, Value)>,
    tree_slots: RwSignal<HashMap<u32, TreeFetch>>,
) -> AnyView {
    let id = field.id;
    let Some(id_tree) = field.id_tree else {
        return view! {
            <div class="field tree-select-field">
                <span class="field-label">{field.name}</span>
                <span class="field-note">"Nenhuma árvore vinculada"</span>
            </div>
        }
        .into_any();
    };

    let label = field.name.clone();
    let required = field.required;
    view! {
        {move || {
            let slot = tree_slots.with(|slots| slots.get(&id_tree).cloned());
            match slot {
                Some(TreeFetch::Ready(tree)) => view! {
                    <TreeSelectField
                        label=label.clone()
                        required=required
                        tree=Signal::derive({
                            let tree = tree.clone();
                            move || tree.clone()
                        })
                        value=Signal::derive(move || {
                            values.with(|m| m.get(&id).and_then(|v| v.as_u64()).map(|v| v as u32))
                        })
                        on_change=Callback::new(move |picked: Option<u32>| {
                            let value = match picked {
                                Some(id_branch) => Value::from(id_branch),
                                None => Value::Null,
                            };
                            on_change.run((id, value));
                        })
                    />
                }
                .into_any(),
                Some(TreeFetch::Failed(message)) => view! {
                    <div class="field tree-select-field">
                        <span class="field-label">{label.clone()}</span>
                        <span class="field-error">
                            {format!("Erro ao carregar a árvore: {}", message)}
                        </span>
                    </div>
                }
                .into_any(),
                _ => view! {
                    <div class="field tree-select-field">
                        <span class="field-label">{label.clone()}</span>
                        <span class="field-note">"Carregando árvore..."</span>
                    </div>
                }
                .into_any(),
            }
        }}
    }
    .into_any()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_begin_fetch_deduplicates_per_tree_id() {
        let mut slots = HashMap::new();
        // Two fields referencing tree 7 trigger exactly one fetch
        assert!(begin_fetch(&mut slots, 7));
        assert!(!begin_fetch(&mut slots, 7));
        // A different tree gets its own slot
        assert!(begin_fetch(&mut slots, 8));
        assert_eq!(slots.len(), 2);
    }

    #[test]
    fn test_begin_fetch_never_clobbers_resolved_slot() {
        let mut slots = HashMap::new();
        slots.insert(
            7,
            TreeFetch::Failed("offline".to_string()),
        );
        assert!(!begin_fetch(&mut slots, 7));
        assert_eq!(slots.get(&7), Some(&TreeFetch::Failed("offline".to_string())));
    }

    #[test]
    fn test_field_config_from_option() {
        let option = TaskTypeOption {
            id_ta_ty_op: 3,
            id_ta_ty: 1,
            name: "Setor".to_string(),
            id_op_ty: 1,
            id_tree: Some(7),
            is_mandatory: true,
        };
        let field = FieldConfig::from_option(&option);
        assert_eq!(field.id, 3);
        assert_eq!(field.type_code, 1);
        assert_eq!(field.id_tree, Some(7));
        assert!(field.required);
    }
}
