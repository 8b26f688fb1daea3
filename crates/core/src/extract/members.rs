//! Function and variable extraction.

use bluescope_api::models::{FunctionView, ParamView, VariableView};

use crate::asset::{
    AssetNode, BlueprintAsset, NodeKind, PinDirection, FUNC_CALLABLE, FUNC_PURE, VAR_EXPOSED,
    VAR_READ_ONLY, VAR_REPLICATED,
};

/// One view per function graph, plus one per event node found in the event
/// graphs. Declaration order is preserved; nothing is sorted.
pub fn extract_functions(asset: &BlueprintAsset) -> Vec<FunctionView> {
    let mut functions = Vec::new();

    for graph in &asset.function_graphs {
        let mut view = FunctionView {
            name: graph.name.clone(),
            is_callable: graph.flags & FUNC_CALLABLE != 0,
            is_pure: graph.flags & FUNC_PURE != 0,
            ..FunctionView::default()
        };

        if let Some(entry) = graph.entry_node() {
            view.params = entry_params(entry);
            // The entry's input pin named ReturnValue carries the declared
            // return type when the function has one.
            if let Some(ret) = entry.find_pin("ReturnValue", PinDirection::Input) {
                view.return_type = ret.pin_type.data_type().to_string();
            }
            view.description = entry.comment.clone();
        }

        functions.push(view);
    }

    for graph in &asset.event_graphs {
        for node in &graph.nodes {
            if let NodeKind::Event { event } = &node.kind {
                functions.push(FunctionView {
                    name: event.clone(),
                    is_event: true,
                    params: entry_params(node),
                    ..FunctionView::default()
                });
            }
        }
    }

    functions
}

/// Parameters are the non-execution output pins: the values the node
/// produces for the graph downstream of it.
fn entry_params(node: &AssetNode) -> Vec<ParamView> {
    node.pins
        .iter()
        .filter(|pin| pin.direction == PinDirection::Output && !pin.pin_type.is_exec())
        .map(|pin| ParamView {
            name: pin.name.clone(),
            param_type: pin.pin_type.data_type().to_string(),
            is_output: false,
            default_value: pin.default_value.clone(),
        })
        .collect()
}

pub fn extract_variables(asset: &BlueprintAsset) -> Vec<VariableView> {
    asset
        .variables
        .iter()
        .map(|var| VariableView {
            name: var.name.clone(),
            var_type: var.var_type.display(),
            default_value: var.default_value.clone(),
            is_exposed: var.flags & VAR_EXPOSED != 0,
            is_read_only: var.flags & VAR_READ_ONLY != 0,
            is_replicated: var.flags & VAR_REPLICATED != 0,
            category: var.category.clone(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::asset::{AssetBuilder, ClassRef, PinType, VarType, VariableDesc};

    fn sample_asset() -> BlueprintAsset {
        AssetBuilder::new("Enemy", "/Game/Enemy")
            .variable(VariableDesc {
                name: "Health".into(),
                var_type: VarType::Primitive("float".into()),
                default_value: "100.0".into(),
                category: "Stats".into(),
                flags: VAR_EXPOSED | VAR_REPLICATED,
            })
            .function_graph("TakeDamage", FUNC_CALLABLE, |g| {
                let entry = g.add_node(NodeKind::FunctionEntry, "TakeDamage");
                g.add_pin(entry, "then", PinDirection::Output, PinType::Exec);
                g.add_pin(
                    entry,
                    "Amount",
                    PinDirection::Output,
                    PinType::Data("int".into()),
                );
                g.add_pin(
                    entry,
                    "ReturnValue",
                    PinDirection::Input,
                    PinType::Data("bool".into()),
                );
                g.set_comment(entry, "Applies incoming damage");
            })
            .event_graph("EventGraph", |g| {
                let event = g.add_node(
                    NodeKind::Event {
                        event: "BeginPlay".into(),
                    },
                    "Event BeginPlay",
                );
                g.add_pin(event, "then", PinDirection::Output, PinType::Exec);
            })
            .build()
    }

    #[test]
    fn test_function_graph_extraction() {
        let functions = extract_functions(&sample_asset());
        assert_eq!(functions.len(), 2);

        let take_damage = &functions[0];
        assert_eq!(take_damage.name, "TakeDamage");
        assert!(!take_damage.is_event);
        assert!(take_damage.is_callable);
        assert!(!take_damage.is_pure);
        assert_eq!(take_damage.params.len(), 1);
        assert_eq!(take_damage.params[0].name, "Amount");
        assert_eq!(take_damage.params[0].param_type, "int");
        assert!(!take_damage.params[0].is_output);
        assert_eq!(take_damage.return_type, "bool");
        assert_eq!(take_damage.description, "Applies incoming damage");
    }

    #[test]
    fn test_event_nodes_become_event_functions() {
        let functions = extract_functions(&sample_asset());
        let begin_play = &functions[1];
        assert_eq!(begin_play.name, "BeginPlay");
        assert!(begin_play.is_event);
        assert!(begin_play.params.is_empty());
        assert!(begin_play.return_type.is_empty());
    }

    #[test]
    fn test_graph_without_entry_yields_empty_params() {
        let asset = AssetBuilder::new("Odd", "/Game/Odd")
            .function_graph("Empty", 0, |_| {})
            .build();
        let functions = extract_functions(&asset);
        assert_eq!(functions.len(), 1);
        assert!(functions[0].params.is_empty());
        assert!(functions[0].return_type.is_empty());
    }

    #[test]
    fn test_variable_extraction() {
        let variables = extract_variables(&sample_asset());
        assert_eq!(variables.len(), 1);
        let health = &variables[0];
        assert_eq!(health.name, "Health");
        assert_eq!(health.var_type, "float");
        assert_eq!(health.default_value, "100.0");
        assert!(health.is_exposed);
        assert!(!health.is_read_only);
        assert!(health.is_replicated);
        assert_eq!(health.category, "Stats");
    }

    #[test]
    fn test_object_variable_renders_class_name() {
        let asset = AssetBuilder::new("Spawner", "/Game/Spawner")
            .variable(VariableDesc {
                name: "Template".into(),
                var_type: VarType::Object(ClassRef::asset("Enemy", "/Game/Enemy")),
                default_value: String::new(),
                category: String::new(),
                flags: 0,
            })
            .build();
        let variables = extract_variables(&asset);
        assert_eq!(variables[0].var_type, "Enemy");
    }
}
