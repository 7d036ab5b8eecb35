use super::{
    to_code::{PutStr, PutStrPretty, TAB_SIZE},
    ty::TsType,
    util,
};

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TsInterface {
    /// Whether the interface is preceded by `export`.
    pub export: bool,

    /// Name of the interface.
    ///
    /// ```text
    /// e.g. interface **Swizzle2In3Out**<T> extends Swizzle1In3Out<T> {...}
    /// ```
    pub ident: String,

    /// Generic parameters of the interface.
    ///
    /// ```text
    /// e.g. interface Swizzle2In3Out<**T**> extends Swizzle1In3Out<T> {...}
    /// ```
    pub generics: Vec<String>,

    /// Inherited interfaces.
    ///
    /// ```text
    /// e.g. interface Swizzle2In3Out<T> extends **Swizzle1In3Out<T>** {...}
    /// ```
    pub extends: Vec<TsType>,

    /// Members in declaration order.
    pub members: Vec<Member>,
}

impl TsInterface {
    pub fn new<I: Into<String>>(ident: I, generics: Vec<String>) -> Self {
        Self {
            export: true,
            ident: ident.into(),
            generics,
            extends: Vec::new(),
            members: Vec::new(),
        }
    }

    /// Members declared by this interface itself, not inherited ones.
    pub fn members_named<'a>(&'a self, ident: &'a str) -> impl Iterator<Item = &'a Member> + 'a {
        self.members.iter().filter(move |member| member.ident() == ident)
    }

    pub fn getter(&self, ident: &str) -> Option<&TsType> {
        self.members.iter().find_map(|member| match member {
            Member::Getter { ident: name, ty } if name == ident => Some(ty),
            _ => None,
        })
    }

    pub fn setter(&self, ident: &str) -> Option<&Param> {
        self.members.iter().find_map(|member| match member {
            Member::Setter { ident: name, param } if name == ident => Some(param),
            _ => None,
        })
    }

    /// Overloads of the method.
    pub fn method_overloads<'a>(
        &'a self,
        ident: &'a str,
    ) -> impl Iterator<Item = (&'a [Param], &'a TsType)> + 'a {
        self.members_named(ident).filter_map(|member| match member {
            Member::Method { params, output, .. } => Some((params.as_slice(), output)),
            _ => None,
        })
    }

    fn put_head(&self, buf: &mut String, sep: &str) {
        if self.export {
            buf.push_str("export ");
        }
        buf.push_str("interface ");
        self.put_ident(buf);
        util::put_generics(&self.generics, buf, sep);
    }
}

impl PutStr for TsInterface {
    fn put_ident(&self, buf: &mut String) {
        buf.push_str(&self.ident);
    }

    fn put_str(&self, buf: &mut String) {
        self.put_head(buf, ",");
        if !self.extends.is_empty() {
            util::put_str_join(self.extends.iter(), buf, " extends ", ",", "");
        }
        util::put_str_join(self.members.iter(), buf, "{", "", "}");
    }
}

impl PutStrPretty for TsInterface {
    fn put_str_pretty(&self, buf: &mut String) {
        self.put_head(buf, ", ");
        if !self.extends.is_empty() {
            util::put_str_pretty_join(self.extends.iter(), buf, " extends ", ", ", "");
        }
        buf.push_str(" {\n");
        for member in self.members.iter() {
            util::pushn(buf, ' ', TAB_SIZE);
            member.put_str_pretty(buf);
            buf.push('\n');
        }
        buf.push('}');
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Member {
    /// ```text
    /// e.g. get xy(): Vec2<T>;
    /// ```
    Getter { ident: String, ty: TsType },

    /// ```text
    /// e.g. set xy(value: Float<T> | Vec2<T>);
    /// ```
    Setter { ident: String, param: Param },

    /// One overload of a method.
    ///
    /// ```text
    /// e.g. setXY(x: Float<T>, y: Float<T>): this;
    /// ```
    Method {
        ident: String,
        params: Vec<Param>,
        output: TsType,
    },
}

impl Member {
    pub fn ident(&self) -> &str {
        match self {
            Self::Getter { ident, .. } | Self::Setter { ident, .. } | Self::Method { ident, .. } => {
                ident
            }
        }
    }
}

impl PutStr for Member {
    fn put_ident(&self, buf: &mut String) {
        buf.push_str(self.ident());
    }

    fn put_str(&self, buf: &mut String) {
        match self {
            Self::Getter { ty, .. } => {
                buf.push_str("get ");
                self.put_ident(buf);
                buf.push_str("():");
                ty.put_str(buf);
            }
            Self::Setter { param, .. } => {
                buf.push_str("set ");
                self.put_ident(buf);
                buf.push('(');
                param.put_str(buf);
                buf.push(')');
            }
            Self::Method { params, output, .. } => {
                self.put_ident(buf);
                util::put_str_join(params.iter(), buf, "(", ",", ")");
                buf.push(':');
                output.put_str(buf);
            }
        }
        buf.push(';');
    }
}

impl PutStrPretty for Member {
    fn put_str_pretty(&self, buf: &mut String) {
        match self {
            Self::Getter { ty, .. } => {
                buf.push_str("get ");
                self.put_ident(buf);
                buf.push_str("(): ");
                ty.put_str_pretty(buf);
            }
            Self::Setter { param, .. } => {
                buf.push_str("set ");
                self.put_ident(buf);
                buf.push('(');
                param.put_str_pretty(buf);
                buf.push(')');
            }
            Self::Method { params, output, .. } => {
                self.put_ident(buf);
                util::put_str_pretty_join(params.iter(), buf, "(", ", ", ")");
                buf.push_str(": ");
                output.put_str_pretty(buf);
            }
        }
        buf.push(';');
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Param {
    /// Name of the parameter.
    ///
    /// ```text
    /// e.g. setXY(**x**: Float<T>, **y**: Float<T>): this;
    /// ```
    pub ident: String,

    /// Type of the parameter.
    ///
    /// ```text
    /// e.g. setXY(x: **Float<T>**, y: **Float<T>**): this;
    /// ```
    pub ty: TsType,
}

impl Param {
    pub fn new<I: Into<String>>(ident: I, ty: TsType) -> Self {
        Self {
            ident: ident.into(),
            ty,
        }
    }
}

impl PutStr for Param {
    fn put_ident(&self, buf: &mut String) {
        buf.push_str(&self.ident);
    }

    fn put_str(&self, buf: &mut String) {
        self.put_ident(buf);
        buf.push(':');
        self.ty.put_str(buf);
    }
}

impl PutStrPretty for Param {
    fn put_str_pretty(&self, buf: &mut String) {
        self.put_ident(buf);
        buf.push_str(": ");
        self.ty.put_str_pretty(buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn sample() -> TsInterface {
        let t = TsType::param("T");
        let float = TsType::named("Float", vec![t.clone()]);
        let vec2 = TsType::named("Vec2", vec![t.clone()]);

        let mut i = TsInterface::new("Swizzle2In2Out", vec!["T".to_owned()]);
        i.extends.push(TsType::named("Swizzle1In2Out", vec![t]));
        i.members.push(Member::Getter {
            ident: "xy".into(),
            ty: vec2.clone(),
        });
        i.members.push(Member::Setter {
            ident: "xy".into(),
            param: Param::new("value", TsType::union(vec![float.clone(), vec2])),
        });
        i.members.push(Member::Method {
            ident: "setXY".into(),
            params: vec![Param::new("x", float.clone()), Param::new("y", float)],
            output: TsType::This,
        });
        i
    }

    #[test]
    fn test_put_str() {
        assert_eq!(
            sample().to_code(),
            "export interface Swizzle2In2Out<T> extends Swizzle1In2Out<T>{\
             get xy():Vec2<T>;\
             set xy(value:Float<T>|Vec2<T>);\
             setXY(x:Float<T>,y:Float<T>):this;}"
        );
    }

    #[test]
    fn test_put_str_pretty() {
        let expect = r#"export interface Swizzle2In2Out<T> extends Swizzle1In2Out<T> {
    get xy(): Vec2<T>;
    set xy(value: Float<T> | Vec2<T>);
    setXY(x: Float<T>, y: Float<T>): this;
}"#;
        assert_eq!(sample().to_pretty_code(), expect);
    }

    #[test]
    fn test_member_lookup() {
        let i = sample();
        assert!(i.getter("xy").is_some());
        assert!(i.setter("xy").is_some());
        assert!(i.getter("yx").is_none());
        assert!(i.getter("setXY").is_none());
        assert_eq!(i.method_overloads("setXY").count(), 1);
        assert_eq!(i.method_overloads("xy").count(), 0);
        assert_eq!(i.members_named("xy").count(), 2);
    }

    #[test]
    fn test_lookup_outlives_name() {
        let i = sample();
        let (ty, param) = {
            let name = String::from("xy");
            (i.getter(&name), i.setter(&name))
        };
        assert_eq!(ty.map(ToString::to_string).as_deref(), Some("Vec2<T>"));
        assert_eq!(param.map(|p| p.ident.as_str()), Some("value"));
        assert!(i.setter("setXY").is_none());
    }
}
