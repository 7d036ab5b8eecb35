use super::{
    alias::TsTypeAlias,
    config::EmitConfig,
    interface::{Member, Param, TsInterface},
    module::DeclModule,
    ty::TsType,
};
use swizzle_core::{
    AXIS_COUNT, Alphabet, BucketKey, MAX_LEN, MethodKind, Pattern, SwizzleMethod, SwizzleTable,
};

/// `Swizzle{len}In{max_index + 1}Out`
pub fn interface_ident(key: BucketKey) -> String {
    format!("Swizzle{}In{}Out", key.len(), key.arity())
}

/// `SwizzleMethodsIn{arity}`
pub fn methods_ident(arity: usize) -> String {
    format!("SwizzleMethodsIn{arity}")
}

/// `SwizzleIn{arity}`
pub fn arity_alias_ident(arity: usize) -> String {
    format!("SwizzleIn{arity}")
}

/// Builds declarations for every bucket of the table.
///
/// The `Swizzle{L}In{N}Out` interfaces come first, highest axis outer and
/// length inner. Method interfaces and arity aliases follow if enabled.
#[tracing::instrument(level = "debug", skip_all)]
pub fn emit_declarations(table: &SwizzleTable, config: &EmitConfig) -> DeclModule {
    let mut module = DeclModule::new();

    for (key, patterns) in table.iter() {
        module.push_interface(property_interface(key, patterns, config));
    }
    if config.with_methods {
        for arity in 1..=AXIS_COUNT {
            module.push_interface(method_interface(arity, config));
        }
    }
    if config.with_arity_aliases {
        for arity in 1..=AXIS_COUNT {
            module.push_type_alias(arity_alias(arity, config));
        }
    }

    tracing::debug!(entries = module.entries.len(), "emitted declarations");
    module
}

fn property_interface(key: BucketKey, patterns: &[Pattern], config: &EmitConfig) -> TsInterface {
    let mut i = TsInterface::new(interface_ident(key), config.generics());
    i.export = config.export;
    if let Some(parent) = key.shorter() {
        i.extends
            .push(TsType::named(interface_ident(parent), config.generic_args()));
    }

    // Every key comes from the table, so the arity is always known.
    let (Some(out), Some(input)) = (
        config.type_of_arity(key.len()),
        config.setter_param_type(key.len()),
    ) else {
        unreachable!("no value type of arity {}", key.len())
    };

    for pattern in patterns {
        // Assigning to the same component twice is meaningless.
        let writable = !pattern.has_duplicates();
        for alphabet in Alphabet::ALL {
            let ident = pattern.name(alphabet);
            i.members.push(Member::Getter {
                ident: ident.clone(),
                ty: out.clone(),
            });
            if writable {
                i.members.push(Member::Setter {
                    ident,
                    param: Param::new("value", input.clone()),
                });
            }
        }
    }
    i
}

fn method_interface(arity: usize, config: &EmitConfig) -> TsInterface {
    let mut i = TsInterface::new(methods_ident(arity), config.generics());
    i.export = config.export;

    let scalar = config.scalar_type();
    for kind in MethodKind::ALL {
        let methods =
            SwizzleMethod::all(kind).filter(|m| m.pattern().max_index() + 1 == arity);
        for method in methods {
            let ident = method.name();
            match kind {
                MethodKind::Set => {
                    let params = method
                        .letters()
                        .map(|c| Param::new(c, scalar.clone()))
                        .collect();
                    i.members.push(Member::Method {
                        ident: ident.clone(),
                        params,
                        output: TsType::This,
                    });
                    // A one-component vector is the scalar itself.
                    let vector = config
                        .type_of_arity(method.arity())
                        .filter(|_| method.arity() > 1);
                    if let Some(vector) = vector {
                        i.members.push(Member::Method {
                            ident,
                            params: vec![Param::new("value", vector)],
                            output: TsType::This,
                        });
                    }
                }
                MethodKind::Flip => i.members.push(Member::Method {
                    ident,
                    params: Vec::new(),
                    output: TsType::This,
                }),
            }
        }
    }
    i
}

fn arity_alias(arity: usize, config: &EmitConfig) -> TsTypeAlias {
    let mut members = Vec::new();
    for k in 1..=arity {
        if let Some(full) = BucketKey::new(MAX_LEN, k - 1) {
            members.push(TsType::named(interface_ident(full), config.generic_args()));
        }
        if config.with_methods {
            members.push(TsType::named(methods_ident(k), config.generic_args()));
        }
    }
    let mut alias = TsTypeAlias::new(
        arity_alias_ident(arity),
        config.generics(),
        TsType::intersection(members),
    );
    alias.export = config.export;
    alias
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_first_block() {
        let table = SwizzleTable::generate();
        let module = emit_declarations(&table, &EmitConfig::default());
        let first = module.interfaces().next().unwrap();
        let expect = r#"export interface Swizzle1In1Out<T> {
    get x(): Float<T>;
    set x(value: Float<T>);
    get r(): Float<T>;
    set r(value: Float<T>);
    get s(): Float<T>;
    set s(value: Float<T>);
}"#;
        assert_eq!(crate::PutStrPretty::to_pretty_code(first), expect);
    }

    #[test]
    fn test_duplicates_are_read_only() {
        let table = SwizzleTable::generate();
        let module = emit_declarations(&table, &EmitConfig::default());
        let i = module.get_interface("Swizzle2In1Out").unwrap();
        assert!(i.getter("xx").is_some());
        assert!(i.setter("xx").is_none());
        assert_eq!(i.members.len(), 3);
        assert_eq!(i.extends[0].to_string(), "Swizzle1In1Out<T>");
    }

    #[test]
    fn test_method_interface() {
        let config = EmitConfig::default();
        let i = method_interface(2, &config);
        let names: Vec<&str> = i.members.iter().map(|m| m.ident()).collect();
        assert_eq!(
            names,
            [
                "setY", "setG", "setT",
                "setXY", "setXY", "setRG", "setRG", "setST", "setST",
                "flipY", "flipG", "flipT", "flipXY", "flipRG", "flipST",
            ]
        );
        let overloads: Vec<String> = i
            .method_overloads("setXY")
            .map(|(params, _)| params.iter().map(|p| p.ty.to_string()).collect::<Vec<_>>().join(", "))
            .collect();
        assert_eq!(overloads, ["Float<T>, Float<T>", "Vec2<T>"]);
    }

    #[test]
    fn test_arity_alias() {
        let config = EmitConfig::default();
        assert_eq!(
            arity_alias(2, &config).ty.to_string(),
            "Swizzle4In1Out<T> & SwizzleMethodsIn1<T> & Swizzle4In2Out<T> & SwizzleMethodsIn2<T>"
        );
        let config = EmitConfig {
            with_methods: false,
            ..Default::default()
        };
        assert_eq!(arity_alias(1, &config).ty.to_string(), "Swizzle4In1Out<T>");
    }
}
