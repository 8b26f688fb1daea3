use std::sync::Arc;

use bluescope_core::asset::{
    AssetBuilder, ClassRef, InMemoryAssetStore, NodeKind, PinDirection, PinType, VarType,
    VariableDesc, FUNC_CALLABLE, VAR_EXPOSED,
};
use bluescope_core::AnalyzerHandle;

/// Small game project used across the integration tests:
///
/// - `/Game/BaseCharacter`: native parent, one `Heal` function.
/// - `/Game/Enemy`: inherits BaseCharacter, `TakeDamage(int Amount)`, a
///   `Health` variable, and a BeginPlay chain of eight execution nodes.
/// - `/Game/Spawner`: spawns Enemy via a statically-set class pin and
///   casts to BaseCharacter.
pub fn sample_project() -> AnalyzerHandle {
    let store = Arc::new(InMemoryAssetStore::new());

    store.insert(
        AssetBuilder::new("BaseCharacter", "/Game/BaseCharacter")
            .parent(ClassRef::native("Character"))
            .function_graph("Heal", FUNC_CALLABLE, |g| {
                let entry = g.add_node(NodeKind::FunctionEntry, "Heal");
                g.add_pin(entry, "then", PinDirection::Output, PinType::Exec);
                g.add_pin(
                    entry,
                    "Amount",
                    PinDirection::Output,
                    PinType::Data("float".into()),
                );
            })
            .build(),
    );

    store.insert(
        AssetBuilder::new("Enemy", "/Game/Enemy")
            .parent(ClassRef::asset("BaseCharacter", "/Game/BaseCharacter"))
            .description("A hostile character")
            .variable(VariableDesc {
                name: "Health".into(),
                var_type: VarType::Primitive("float".into()),
                default_value: "100.0".into(),
                category: "Stats".into(),
                flags: VAR_EXPOSED,
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
                g.set_comment(entry, "Subtracts incoming damage from health");
            })
            .event_graph("EventGraph", |g| {
                let begin = g.add_node(
                    NodeKind::Event {
                        event: "BeginPlay".into(),
                    },
                    "Event BeginPlay",
                );
                let mut previous =
                    (begin, g.add_pin(begin, "then", PinDirection::Output, PinType::Exec));
                for i in 0..7 {
                    let step = g.add_node(
                        NodeKind::Other("PrintString".into()),
                        format!("Print String {i}"),
                    );
                    let (step_in, step_out) = g.exec_pins(step);
                    g.connect(previous, (step, step_in));
                    previous = (step, step_out);
                }
            })
            .build(),
    );

    store.insert(
        AssetBuilder::new("Spawner", "/Game/Spawner")
            .parent(ClassRef::native("Actor"))
            .event_graph("EventGraph", |g| {
                let spawn = g.add_node(NodeKind::SpawnActor, "Spawn Actor");
                let class_pin = g.add_pin(
                    spawn,
                    "Class",
                    PinDirection::Input,
                    PinType::Data("class".into()),
                );
                g.set_pin_default_object(spawn, class_pin, ClassRef::asset("Enemy", "/Game/Enemy"));

                g.add_node(
                    NodeKind::DynamicCast {
                        target: ClassRef::asset("BaseCharacter", "/Game/BaseCharacter"),
                    },
                    "Cast To BaseCharacter",
                );
            })
            .build(),
    );

    AnalyzerHandle::new(store)
}
