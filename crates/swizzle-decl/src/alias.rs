use super::{
    to_code::{PutStr, PutStrPretty},
    ty::TsType,
    util,
};

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TsTypeAlias {
    /// Whether the alias is preceded by `export`.
    pub export: bool,

    /// ```text
    /// e.g. type **SwizzleIn2**<T> = Swizzle4In1Out<T> & Swizzle4In2Out<T>;
    /// ```
    pub ident: String,

    /// ```text
    /// e.g. type SwizzleIn2<**T**> = Swizzle4In1Out<T> & Swizzle4In2Out<T>;
    /// ```
    pub generics: Vec<String>,

    /// ```text
    /// e.g. type SwizzleIn2<T> = **Swizzle4In1Out<T> & Swizzle4In2Out<T>**;
    /// ```
    pub ty: TsType,
}

impl TsTypeAlias {
    pub fn new<I: Into<String>>(ident: I, generics: Vec<String>, ty: TsType) -> Self {
        Self {
            export: true,
            ident: ident.into(),
            generics,
            ty,
        }
    }

    fn put_head(&self, buf: &mut String, sep: &str) {
        if self.export {
            buf.push_str("export ");
        }
        buf.push_str("type ");
        self.put_ident(buf);
        util::put_generics(&self.generics, buf, sep);
    }
}

impl PutStr for TsTypeAlias {
    fn put_ident(&self, buf: &mut String) {
        buf.push_str(&self.ident);
    }

    fn put_str(&self, buf: &mut String) {
        self.put_head(buf, ",");
        buf.push('=');
        self.ty.put_str(buf);
        buf.push(';');
    }
}

impl PutStrPretty for TsTypeAlias {
    fn put_str_pretty(&self, buf: &mut String) {
        self.put_head(buf, ", ");
        buf.push_str(" = ");
        self.ty.put_str_pretty(buf);
        buf.push(';');
    }
}
