use super::error::{CheckError, CheckResult};
use swizzle_core::{BucketKey, MAX_LEN};
use swizzle_decl::{
    DeclModule, EmitConfig, Param, TsInterface, TsType, arity_alias_ident, interface_ident,
    methods_ident,
};

const MAX_DEPTH: usize = 64;

/// An interface reached from some type, together with the arguments its
/// generic parameters are bound to.
#[derive(Debug, Clone)]
pub(crate) struct Bound<'m> {
    pub(crate) interface: &'m TsInterface,
    pub(crate) args: Vec<TsType>,
}

impl Bound<'_> {
    pub(crate) fn subst(&self, ty: &TsType) -> TsType {
        ty.substitute(&self.interface.generics, &self.args)
    }

    pub(crate) fn subst_params(&self, params: &[Param]) -> Vec<TsType> {
        params.iter().map(|param| self.subst(&param.ty)).collect()
    }
}

/// Declarations plus the vocabulary of value types.
#[derive(Debug, Clone)]
pub struct TypeEnv<'m> {
    module: &'m DeclModule,
    config: EmitConfig,
}

impl<'m> TypeEnv<'m> {
    pub fn new(module: &'m DeclModule, config: &EmitConfig) -> Self {
        Self {
            module,
            config: config.clone(),
        }
    }

    /// Type of a value with the given number of components.
    pub fn value_type(&self, arity: usize) -> Option<TsType> {
        self.config.type_of_arity(arity)
    }

    /// What a value of the given arity exposes: `SwizzleIn{N}` if declared,
    /// otherwise the same intersection built from the interfaces directly.
    pub fn surface(&self, arity: usize, args: &[TsType]) -> TsType {
        let alias = arity_alias_ident(arity);
        if self.module.get_type_alias(&alias).is_some() {
            return TsType::named(alias, args.to_vec());
        }

        let mut members = Vec::new();
        for k in 1..=arity {
            if let Some(key) = BucketKey::new(MAX_LEN, k - 1) {
                members.push(TsType::named(interface_ident(key), args.to_vec()));
            }
            let methods = methods_ident(k);
            if self.module.contains_interface(&methods) {
                members.push(TsType::named(methods, args.to_vec()));
            }
        }
        TsType::intersection(members)
    }

    /// Collects every interface contributing members to `ty`.
    pub(crate) fn expand(&self, ty: &TsType) -> CheckResult<Vec<Bound<'m>>> {
        let mut out = Vec::new();
        self.expand_into(ty, &mut out, 0)?;
        Ok(out)
    }

    fn expand_into(&self, ty: &TsType, out: &mut Vec<Bound<'m>>, depth: usize) -> CheckResult<()> {
        if depth > MAX_DEPTH {
            return Err(CheckError::Cyclic(ty.to_string()));
        }

        match ty {
            TsType::Named { ident, args } => {
                if let Some(arity) = self.config.arity_of(ident) {
                    let surface = self.surface(arity, args);
                    return self.expand_into(&surface, out, depth + 1);
                }
                if let Some(alias) = self.module.get_type_alias(ident) {
                    let ty = alias.ty.substitute(&alias.generics, args);
                    return self.expand_into(&ty, out, depth + 1);
                }
                let interface = self
                    .module
                    .get_interface(ident)
                    .ok_or_else(|| CheckError::UnknownType(ty.to_string()))?;
                let bound = Bound {
                    interface,
                    args: args.clone(),
                };
                for parent in interface.extends.iter() {
                    let parent = bound.subst(parent);
                    self.expand_into(&parent, out, depth + 1)?;
                }
                tracing::trace!(interface = %interface.ident, "expanded");
                out.push(bound);
                Ok(())
            }
            TsType::Intersection(members) => {
                for member in members {
                    self.expand_into(member, out, depth + 1)?;
                }
                Ok(())
            }
            _ => Err(CheckError::UnknownType(ty.to_string())),
        }
    }
}
