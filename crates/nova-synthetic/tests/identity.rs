use std::collections::hash_map::DefaultHasher;
use std::collections::HashSet;
use std::hash::{Hash, Hasher};
use std::rc::Rc;

use nova_synthetic::memory::{MemoryClass, MemoryElementFactory};
use nova_synthetic::{
    ElementFactory, Modifier, PrimitiveType, SyntheticMethodBuilder, Type, SYNTHETIC_METHOD_HASH,
};
use proptest::prelude::*;

const PROPTEST_CASES: u32 = 128;

fn hash_of(method: &SyntheticMethodBuilder) -> u64 {
    let mut hasher = DefaultHasher::new();
    method.hash(&mut hasher);
    hasher.finish()
}

fn getter(factory: Rc<dyn ElementFactory>, class: &Rc<MemoryClass>) -> SyntheticMethodBuilder {
    SyntheticMethodBuilder::new(factory, "getId")
        .with_modifier(Modifier::Public)
        .with_annotation("javax.annotation.Nonnull")
        .with_return_type(Type::long())
        .with_containing_class(class.clone())
}

#[test]
fn builders_with_same_signature_are_equal() {
    let class = Rc::new(MemoryClass::new("com.example.User"));
    let a = getter(Rc::new(MemoryElementFactory::new()), &class);
    let b = getter(Rc::new(MemoryElementFactory::new()), &class);

    assert_eq!(a, b);
    // Rendering state does not take part in equality.
    a.rendered_node().unwrap();
    assert_eq!(a, b);
}

#[test]
fn containing_classes_compare_by_name() {
    let first = Rc::new(MemoryClass::new("com.example.User"));
    let refreshed = Rc::new(MemoryClass::new("com.example.User"));
    let other = Rc::new(MemoryClass::new("com.example.Account"));
    let factory: Rc<dyn ElementFactory> = Rc::new(MemoryElementFactory::new());

    assert_eq!(getter(factory.clone(), &first), getter(factory.clone(), &refreshed));
    assert_ne!(getter(factory.clone(), &first), getter(factory.clone(), &other));

    let orphan = SyntheticMethodBuilder::new(factory.clone(), "getId")
        .with_modifier(Modifier::Public)
        .with_annotation("javax.annotation.Nonnull")
        .with_return_type(Type::long());
    let other_orphan = SyntheticMethodBuilder::new(factory.clone(), "getId")
        .with_modifier(Modifier::Public)
        .with_annotation("javax.annotation.Nonnull")
        .with_return_type(Type::long());
    assert_eq!(orphan, other_orphan);
    assert_ne!(orphan, getter(factory, &first));
}

#[test]
fn each_signature_component_breaks_equality() {
    let class = Rc::new(MemoryClass::new("com.example.User"));
    let factory: Rc<dyn ElementFactory> = Rc::new(MemoryElementFactory::new());
    let base = getter(factory.clone(), &class);

    let renamed = getter(factory.clone(), &class);
    renamed.rename("getKey").unwrap();
    assert_ne!(base, renamed);

    assert_ne!(base, getter(factory.clone(), &class).with_constructor(true));
    assert_ne!(base, getter(factory.clone(), &class).with_modifier(Modifier::Static));
    assert_ne!(base, getter(factory.clone(), &class).with_annotation("java.lang.Deprecated"));
    assert_ne!(base, getter(factory.clone(), &class).with_parameter("x", Type::int()));
    assert_ne!(base, getter(factory.clone(), &class).with_return_type(Type::int()));
    assert_ne!(base, getter(factory.clone(), &class).with_return_type(None::<Type>));
}

#[test]
fn duplicate_modifiers_do_not_affect_equality() {
    let class = Rc::new(MemoryClass::new("com.example.User"));
    let factory: Rc<dyn ElementFactory> = Rc::new(MemoryElementFactory::new());
    let base = getter(factory.clone(), &class);
    let doubled = getter(factory, &class).with_modifier(Modifier::Public);
    assert_eq!(base, doubled);
}

#[test]
#[allow(clippy::mutable_key_type)]
fn equal_builders_deduplicate_in_sets() {
    let class = Rc::new(MemoryClass::new("com.example.User"));
    let factory: Rc<dyn ElementFactory> = Rc::new(MemoryElementFactory::new());

    let mut set = HashSet::new();
    assert!(set.insert(getter(factory.clone(), &class)));
    assert!(!set.insert(getter(factory.clone(), &class)));
    assert!(set.insert(
        SyntheticMethodBuilder::new(factory, "setId")
            .with_return_type(Type::Void)
            .with_parameter("id", Type::long())
            .with_containing_class(class.clone())
    ));
    assert_eq!(set.len(), 2);
}

#[test]
#[allow(clippy::mutable_key_type)]
fn renamed_key_stays_findable() {
    let class = Rc::new(MemoryClass::new("com.example.User"));
    let factory: Rc<dyn ElementFactory> = Rc::new(MemoryElementFactory::new());

    let mut set = HashSet::new();
    set.insert(getter(factory.clone(), &class));

    let stored = set.iter().next().unwrap();
    let before = hash_of(stored);
    stored.rename("getKey").unwrap();
    assert_eq!(hash_of(stored), before);

    let probe = getter(factory, &class);
    probe.rename("getKey").unwrap();
    assert!(set.contains(&probe));
}

#[derive(Clone, Debug)]
struct Shape {
    name: String,
    is_constructor: bool,
    modifiers: Vec<Modifier>,
    annotations: Vec<String>,
    params: Vec<(String, Type)>,
    return_type: Option<Type>,
    class_name: Option<String>,
}

fn arb_ident() -> impl Strategy<Value = String> {
    "[a-z][A-Za-z0-9_]{0,8}"
}

fn arb_type() -> impl Strategy<Value = Type> {
    prop_oneof![
        prop::sample::select(PrimitiveType::ALL.to_vec()).prop_map(Type::Primitive),
        Just(Type::string()),
        Just(Type::class("java.util.List", vec![Type::string()])),
        Just(Type::array(Type::int())),
    ]
}

fn arb_shape() -> impl Strategy<Value = Shape> {
    (
        arb_ident(),
        any::<bool>(),
        prop::collection::vec(prop::sample::select(Modifier::ALL.to_vec()), 0..4),
        prop::collection::vec("[a-z]{1,5}\\.[A-Z][a-z]{1,5}", 0..3),
        prop::collection::vec((arb_ident(), arb_type()), 0..4),
        prop::option::of(arb_type()),
        prop::option::of("com\\.example\\.[A-Z][a-z]{1,6}"),
    )
        .prop_map(
            |(name, is_constructor, modifiers, annotations, params, return_type, class_name)| {
                Shape {
                    name,
                    is_constructor,
                    modifiers,
                    annotations,
                    params,
                    return_type,
                    class_name,
                }
            },
        )
}

fn build(shape: &Shape, class: Option<&Rc<MemoryClass>>) -> SyntheticMethodBuilder {
    let mut method = SyntheticMethodBuilder::new(Rc::new(MemoryElementFactory::new()), &shape.name)
        .with_constructor(shape.is_constructor)
        .with_modifiers(shape.modifiers.iter().copied())
        .with_return_type(shape.return_type.clone());
    for annotation in &shape.annotations {
        method = method.with_annotation(annotation.as_str());
    }
    for (name, ty) in &shape.params {
        method = method.with_parameter(name.as_str(), ty.clone());
    }
    if let Some(class) = class {
        method = method.with_containing_class(class.clone());
    }
    method
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(PROPTEST_CASES))]

    #[test]
    fn hash_is_constant_across_configurations(a in arb_shape(), b in arb_shape()) {
        let class_a = a.class_name.as_ref().map(|name| Rc::new(MemoryClass::new(name.as_str())));
        let class_b = b.class_name.as_ref().map(|name| Rc::new(MemoryClass::new(name.as_str())));
        let first = build(&a, class_a.as_ref());
        let second = build(&b, class_b.as_ref());

        prop_assert_eq!(first.hash_code(), SYNTHETIC_METHOD_HASH);
        prop_assert_eq!(second.hash_code(), SYNTHETIC_METHOD_HASH);
        prop_assert_eq!(hash_of(&first), hash_of(&second));
    }

    #[test]
    fn identical_configurations_are_equal(shape in arb_shape()) {
        let class = shape.class_name.as_ref().map(|name| Rc::new(MemoryClass::new(name.as_str())));
        prop_assert_eq!(build(&shape, class.as_ref()), build(&shape, class.as_ref()));
    }

    #[test]
    fn delete_never_fails(shape in arb_shape(), render in any::<bool>()) {
        let class = shape.class_name.as_ref().map(|name| Rc::new(MemoryClass::new(name.as_str())));
        let method = build(&shape, class.as_ref());
        if render {
            // The outcome of rendering does not matter here.
            let _ = method.rendered_node();
        }
        prop_assert!(method.check_delete().is_ok());
        prop_assert!(method.delete().is_ok());
        prop_assert!(method.delete().is_ok());
    }
}
