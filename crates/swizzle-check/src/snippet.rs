use super::{
    check::Checker,
    error::{CheckError, CheckResult},
};
use quote::ToTokens;
use swizzle_decl::TsType;
use syn::{Expr, Member};

impl Checker<'_> {
    /// Type checks an expression written in field/method syntax.
    ///
    /// ```text
    /// vec3.xy               read
    /// vec3.xy = float       write, evaluates to the assigned value
    /// vec4.setXY(vec2)      method call
    /// vec4.xyz.flipXZ()     chains
    /// ```
    ///
    /// `float`, `vec2`, `vec3`, and `vec4` stand for values of those types.
    pub fn check(&self, src: &str) -> CheckResult<TsType> {
        let expr = syn::parse_str::<Expr>(src).map_err(|e| CheckError::Parse {
            src: src.to_owned(),
            reason: e.to_string(),
        })?;
        let ty = self.eval(&expr);
        tracing::debug!(src, ?ty, "checked");
        ty
    }

    fn eval(&self, expr: &Expr) -> CheckResult<TsType> {
        match expr {
            Expr::Path(path) if path.qself.is_none() => {
                let ident = path.path.get_ident().ok_or_else(|| unsupported(expr))?;
                self.value(&ident.to_string())
            }
            Expr::Paren(paren) => self.eval(&paren.expr),
            Expr::Field(field) => {
                let receiver = self.eval(&field.base)?;
                let member = member_ident(&field.member).ok_or_else(|| unsupported(expr))?;
                self.read(&receiver, &member)
            }
            Expr::Assign(assign) => {
                let Expr::Field(field) = &*assign.left else {
                    return Err(unsupported(expr));
                };
                let receiver = self.eval(&field.base)?;
                let member = member_ident(&field.member).ok_or_else(|| unsupported(expr))?;
                let value = self.eval(&assign.right)?;
                self.write(&receiver, &member, &value)?;
                Ok(value)
            }
            Expr::MethodCall(call) if call.turbofish.is_none() => {
                let receiver = self.eval(&call.receiver)?;
                let args = call
                    .args
                    .iter()
                    .map(|arg| self.eval(arg))
                    .collect::<CheckResult<Vec<_>>>()?;
                self.call(&receiver, &call.method.to_string(), &args)
            }
            _ => Err(unsupported(expr)),
        }
    }
}

fn member_ident(member: &Member) -> Option<String> {
    match member {
        Member::Named(ident) => Some(ident.to_string()),
        Member::Unnamed(_) => None,
    }
}

fn unsupported(expr: &Expr) -> CheckError {
    CheckError::Unsupported(expr.to_token_stream().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use swizzle_core::SwizzleTable;
    use swizzle_decl::{EmitConfig, emit_declarations};

    #[test]
    fn test_unsupported_syntax() {
        let config = EmitConfig::default();
        let module = emit_declarations(&SwizzleTable::generate(), &config);
        let checker = Checker::new(&module, &config);

        assert!(matches!(checker.check("vec3 + vec3"), Err(CheckError::Unsupported(_))));
        assert!(matches!(checker.check("vec3.0"), Err(CheckError::Unsupported(_))));
        assert!(matches!(checker.check("std::vec3"), Err(CheckError::Unsupported(_))));
        assert!(matches!(checker.check("vec3.x ="), Err(CheckError::Parse { .. })));
        assert_eq!(
            checker.check("mat3.x"),
            Err(CheckError::UnknownValue("mat3".into()))
        );
    }

    #[test]
    fn test_parens_and_chains() {
        let config = EmitConfig::default();
        let module = emit_declarations(&SwizzleTable::generate(), &config);
        let checker = Checker::new(&module, &config);

        assert_eq!(checker.check("(vec4.xyz).xy").unwrap().to_string(), "Vec2<T>");
        assert_eq!(checker.check("vec4.xyz.flipXZ()").unwrap().to_string(), "Vec3<T>");
    }
}
