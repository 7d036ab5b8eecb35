use super::{
    to_code::{PutStr, PutStrPretty},
    util,
};
use std::fmt;

/// Type expression of a declaration.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TsType {
    /// Reference to a declared type.
    ///
    /// ```text
    /// e.g. Vec2<T>
    /// ```
    Named { ident: String, args: Vec<TsType> },

    /// Generic parameter of the enclosing declaration.
    Param(String),

    /// Polymorphic `this`.
    This,

    /// ```text
    /// e.g. Float<T> | Vec2<T>
    /// ```
    Union(Vec<TsType>),

    /// ```text
    /// e.g. Swizzle4In1Out<T> & Swizzle4In2Out<T>
    /// ```
    Intersection(Vec<TsType>),

    /// ```text
    /// e.g. 'xy'
    /// ```
    StringLiteral(String),
}

impl TsType {
    pub fn named<I: Into<String>>(ident: I, args: Vec<TsType>) -> Self {
        Self::Named {
            ident: ident.into(),
            args,
        }
    }

    pub fn param<I: Into<String>>(ident: I) -> Self {
        Self::Param(ident.into())
    }

    /// Builds a union, collapsing it when there's only one member.
    pub fn union(mut members: Vec<TsType>) -> Self {
        if members.len() == 1 {
            members.swap_remove(0)
        } else {
            Self::Union(members)
        }
    }

    /// Builds an intersection, collapsing it when there's only one member.
    pub fn intersection(mut members: Vec<TsType>) -> Self {
        if members.len() == 1 {
            members.swap_remove(0)
        } else {
            Self::Intersection(members)
        }
    }

    /// Replaces generic parameters with the given arguments.
    pub fn substitute(&self, params: &[String], args: &[TsType]) -> Self {
        match self {
            Self::Param(ident) => params
                .iter()
                .position(|param| param == ident)
                .and_then(|i| args.get(i))
                .cloned()
                .unwrap_or_else(|| self.clone()),
            Self::Named { ident, args: inner } => Self::Named {
                ident: ident.clone(),
                args: inner.iter().map(|ty| ty.substitute(params, args)).collect(),
            },
            Self::Union(members) => {
                Self::Union(members.iter().map(|ty| ty.substitute(params, args)).collect())
            }
            Self::Intersection(members) => Self::Intersection(
                members.iter().map(|ty| ty.substitute(params, args)).collect(),
            ),
            Self::This | Self::StringLiteral(_) => self.clone(),
        }
    }

    fn needs_paren_in_intersection(&self) -> bool {
        matches!(self, Self::Union(_))
    }
}

struct Operand<'a>(&'a TsType);

impl PutStr for Operand<'_> {
    fn put_ident(&self, buf: &mut String) {
        self.0.put_ident(buf);
    }

    fn put_str(&self, buf: &mut String) {
        if self.0.needs_paren_in_intersection() {
            buf.push('(');
            self.0.put_str(buf);
            buf.push(')');
        } else {
            self.0.put_str(buf);
        }
    }
}

impl PutStrPretty for Operand<'_> {
    fn put_str_pretty(&self, buf: &mut String) {
        if self.0.needs_paren_in_intersection() {
            buf.push('(');
            self.0.put_str_pretty(buf);
            buf.push(')');
        } else {
            self.0.put_str_pretty(buf);
        }
    }
}

impl PutStr for TsType {
    fn put_ident(&self, buf: &mut String) {
        match self {
            Self::Named { ident, .. } | Self::Param(ident) => buf.push_str(ident),
            Self::This => buf.push_str("this"),
            _ => self.put_str(buf),
        }
    }

    fn put_str(&self, buf: &mut String) {
        match self {
            Self::Named { args, .. } => {
                self.put_ident(buf);
                if !args.is_empty() {
                    util::put_str_join(args.iter(), buf, "<", ",", ">");
                }
            }
            Self::Param(_) | Self::This => self.put_ident(buf),
            Self::Union(members) => util::put_str_join(members.iter(), buf, "", "|", ""),
            Self::Intersection(members) => {
                let operands: Vec<Operand> = members.iter().map(Operand).collect();
                util::put_str_join(operands.iter(), buf, "", "&", "");
            }
            Self::StringLiteral(s) => {
                buf.push('\'');
                buf.push_str(s);
                buf.push('\'');
            }
        }
    }
}

impl PutStrPretty for TsType {
    fn put_str_pretty(&self, buf: &mut String) {
        match self {
            Self::Named { args, .. } => {
                self.put_ident(buf);
                if !args.is_empty() {
                    util::put_str_pretty_join(args.iter(), buf, "<", ", ", ">");
                }
            }
            Self::Union(members) => util::put_str_pretty_join(members.iter(), buf, "", " | ", ""),
            Self::Intersection(members) => {
                let operands: Vec<Operand> = members.iter().map(Operand).collect();
                util::put_str_pretty_join(operands.iter(), buf, "", " & ", "");
            }
            _ => self.put_str(buf),
        }
    }
}

impl fmt::Display for TsType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_pretty_code())
    }
}
