use super::{
    alias::TsTypeAlias,
    interface::TsInterface,
    to_code::{PutStr, PutStrPretty},
    util,
};

/// A declaration file.
#[derive(Default, Debug, Clone, PartialEq, Eq, Hash)]
pub struct DeclModule {
    /// Each entry such as interface and type alias.
    pub entries: Vec<DeclEntry>,
}

impl DeclModule {
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Generates declaration text.
    pub fn build(&self) -> String {
        let mut res = String::new();
        for entry in self.entries.iter() {
            entry.put_str(&mut res);
        }
        res
    }

    /// Generates declaration text with white space.
    ///
    /// Each entry is followed by one blank line.
    pub fn build_pretty(&self) -> String {
        let mut res = String::new();
        for entry in self.entries.iter() {
            entry.put_str_pretty(&mut res);
            res.push_str("\n\n");
        }

        #[cfg(debug_assertions)]
        {
            let mut non_pretty = self.build();
            let mut pretty = res.clone();
            non_pretty.retain(|c| !c.is_whitespace());
            pretty.retain(|c| !c.is_whitespace());
            debug_assert_eq!(non_pretty, pretty, "internal bug detected");
        }

        res
    }

    /// Retrieves the index of the interface that has the given name.
    pub fn find_interface(&self, ident: &str) -> Option<usize> {
        util::find_index(self.entries.iter(), ident, |entry| {
            entry.as_interface().map(|i| i.ident.as_str())
        })
    }

    /// Determines if the interface exists.
    pub fn contains_interface(&self, ident: &str) -> bool {
        self.find_interface(ident).is_some()
    }

    /// Retrieves the interface that has the given name.
    pub fn get_interface(&self, ident: &str) -> Option<&TsInterface> {
        self.find_interface(ident)
            .and_then(|i| self.entries[i].as_interface())
    }

    /// Appends the given interface.
    pub fn push_interface(&mut self, i: TsInterface) {
        self.entries.push(DeclEntry::Interface(i));
    }

    /// Tries to remove the interface that has the given name.
    /// If succeeded, returns removed one.
    pub fn remove_interface(&mut self, ident: &str) -> Option<TsInterface> {
        self.find_interface(ident)
            .map(|i| match self.entries.remove(i) {
                DeclEntry::Interface(i) => i,
                _ => unreachable!(),
            })
    }

    /// Retrieves the index of the type alias that has the given name.
    pub fn find_type_alias(&self, ident: &str) -> Option<usize> {
        util::find_index(self.entries.iter(), ident, |entry| {
            entry.as_type_alias().map(|a| a.ident.as_str())
        })
    }

    /// Retrieves the type alias that has the given name.
    pub fn get_type_alias(&self, ident: &str) -> Option<&TsTypeAlias> {
        self.find_type_alias(ident)
            .and_then(|i| self.entries[i].as_type_alias())
    }

    /// Appends the given type alias.
    pub fn push_type_alias(&mut self, alias: TsTypeAlias) {
        self.entries.push(DeclEntry::TypeAlias(alias));
    }

    pub fn interfaces(&self) -> impl Iterator<Item = &TsInterface> {
        self.entries.iter().filter_map(DeclEntry::as_interface)
    }

    pub fn type_aliases(&self) -> impl Iterator<Item = &TsTypeAlias> {
        self.entries.iter().filter_map(DeclEntry::as_type_alias)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum DeclEntry {
    Interface(TsInterface),
    TypeAlias(TsTypeAlias),
}

macro_rules! impl_decl_entry_matcher {
    ($fn:ident, $kind:ident, $ret:ty) => {
        pub fn $fn(&self) -> Option<&$ret> {
            if let Self::$kind(inner) = self {
                Some(inner)
            } else {
                None
            }
        }

        paste::paste! {
            pub fn [<$fn _mut>](&mut self) -> Option<&mut $ret> {
                if let Self::$kind(inner) = self {
                    Some(inner)
                } else {
                    None
                }
            }
        }
    };
}

impl DeclEntry {
    impl_decl_entry_matcher!(as_interface, Interface, TsInterface);
    impl_decl_entry_matcher!(as_type_alias, TypeAlias, TsTypeAlias);

    pub fn ident(&self) -> &str {
        match self {
            Self::Interface(i) => &i.ident,
            Self::TypeAlias(alias) => &alias.ident,
        }
    }
}

impl PutStr for DeclEntry {
    fn put_ident(&self, buf: &mut String) {
        match self {
            Self::Interface(i) => i.put_ident(buf),
            Self::TypeAlias(alias) => alias.put_ident(buf),
        }
    }

    fn put_str(&self, buf: &mut String) {
        match self {
            Self::Interface(i) => i.put_str(buf),
            Self::TypeAlias(alias) => alias.put_str(buf),
        }
    }
}

impl PutStrPretty for DeclEntry {
    fn put_str_pretty(&self, buf: &mut String) {
        match self {
            Self::Interface(i) => i.put_str_pretty(buf),
            Self::TypeAlias(alias) => alias.put_str_pretty(buf),
        }
    }
}
