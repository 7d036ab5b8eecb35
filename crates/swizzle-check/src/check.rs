use super::{
    env::{Bound, TypeEnv},
    error::{CheckError, CheckResult},
};
use swizzle_decl::{DeclModule, EmitConfig, Member, TsType};

/// Type checker for swizzle expressions over a declaration module.
///
/// Receivers are value types such as `Vec3<T>`. Their members are whatever
/// the declarations expose for that arity, so a missing or extra declaration
/// shows up as an accepted or rejected expression.
#[derive(Debug, Clone)]
pub struct Checker<'m> {
    env: TypeEnv<'m>,
}

impl<'m> Checker<'m> {
    pub fn new(module: &'m DeclModule, config: &EmitConfig) -> Self {
        Self {
            env: TypeEnv::new(module, config),
        }
    }

    pub fn env(&self) -> &TypeEnv<'m> {
        &self.env
    }

    /// Maps `float`, `vec2`, `vec3`, and `vec4` to their declared types.
    pub fn value(&self, word: &str) -> CheckResult<TsType> {
        let arity = match word {
            "float" => 1,
            "vec2" => 2,
            "vec3" => 3,
            "vec4" => 4,
            _ => return Err(CheckError::UnknownValue(word.to_owned())),
        };
        self.env
            .value_type(arity)
            .ok_or_else(|| CheckError::UnknownValue(word.to_owned()))
    }

    /// Type of `receiver.member`.
    pub fn read(&self, receiver: &TsType, member: &str) -> CheckResult<TsType> {
        let bounds = self.env.expand(receiver)?;
        for bound in bounds.iter() {
            if let Some(ty) = bound.interface.getter(member) {
                return Ok(bound.subst(ty));
            }
        }

        if has_method(&bounds, member) {
            Err(CheckError::NotAProperty {
                ty: receiver.to_string(),
                member: member.to_owned(),
            })
        } else {
            Err(no_such_member(receiver, member))
        }
    }

    /// Checks `receiver.member = value`.
    pub fn write(&self, receiver: &TsType, member: &str, value: &TsType) -> CheckResult<()> {
        let bounds = self.env.expand(receiver)?;
        for bound in bounds.iter() {
            if let Some(param) = bound.interface.setter(member) {
                let expected = bound.subst(&param.ty);
                return if self.is_assignable(value, &expected) {
                    Ok(())
                } else {
                    Err(CheckError::NotAssignable {
                        expected: expected.to_string(),
                        found: value.to_string(),
                    })
                };
            }
        }

        if bounds.iter().any(|bound| bound.interface.getter(member).is_some()) {
            Err(CheckError::ReadOnly {
                member: member.to_owned(),
            })
        } else {
            Err(no_such_member(receiver, member))
        }
    }

    /// Type of `receiver.method(args...)`.
    pub fn call(&self, receiver: &TsType, method: &str, args: &[TsType]) -> CheckResult<TsType> {
        let bounds = self.env.expand(receiver)?;

        let mut found_any = false;
        for bound in bounds.iter() {
            for (params, output) in bound.interface.method_overloads(method) {
                found_any = true;
                let params = bound.subst_params(params);
                let accepted = params.len() == args.len()
                    && args
                        .iter()
                        .zip(params.iter())
                        .all(|(arg, param)| self.is_assignable(arg, param));
                if accepted {
                    return Ok(match bound.subst(output) {
                        TsType::This => receiver.clone(),
                        ty => ty,
                    });
                }
            }
        }

        if found_any {
            let found = args
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join(", ");
            Err(CheckError::NoMatchingOverload {
                method: method.to_owned(),
                found,
            })
        } else if bounds
            .iter()
            .any(|bound| bound.interface.members_named(method).next().is_some())
        {
            Err(CheckError::NotCallable {
                member: method.to_owned(),
            })
        } else {
            Err(no_such_member(receiver, method))
        }
    }

    /// Whether a value of type `from` can be passed where `to` is expected.
    ///
    /// Named types are compared by name and arguments, not by structure.
    pub fn is_assignable(&self, from: &TsType, to: &TsType) -> bool {
        match (from, to) {
            (_, TsType::Union(members)) if members.iter().any(|to| self.is_assignable(from, to)) => {
                true
            }
            (TsType::Union(members), _) => members.iter().all(|from| self.is_assignable(from, to)),
            (_, TsType::Intersection(members)) => {
                members.iter().all(|to| self.is_assignable(from, to))
            }
            (TsType::Intersection(members), _) => {
                members.iter().any(|from| self.is_assignable(from, to))
            }
            _ => from == to,
        }
    }
}

fn has_method(bounds: &[Bound<'_>], ident: &str) -> bool {
    bounds.iter().any(|bound| {
        bound
            .interface
            .members_named(ident)
            .any(|member| matches!(member, Member::Method { .. }))
    })
}

fn no_such_member(receiver: &TsType, member: &str) -> CheckError {
    CheckError::NoSuchMember {
        ty: receiver.to_string(),
        member: member.to_owned(),
    }
}
