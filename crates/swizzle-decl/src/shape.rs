use super::{
    alias::TsTypeAlias,
    config::EmitConfig,
    emit::emit_declarations,
    module::DeclModule,
    ty::TsType,
};
use std::{fmt::Write, str::FromStr};
use swizzle_core::{BucketKey, SwizzleTable};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DeclError {
    #[error("unknown output format `{0}`, expected one of declarations, unions, table")]
    UnknownFormat(String),
}

/// Shape the swizzle table is rendered into.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OutputFormat {
    /// `Swizzle{L}In{N}Out` interfaces with getters and setters.
    #[default]
    Declarations,

    /// One string literal union per bucket.
    Unions,

    /// A markdown table listing each bucket.
    Table,
}

impl FromStr for OutputFormat {
    type Err = DeclError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "declarations" | "decl" | "d.ts" => Ok(Self::Declarations),
            "unions" | "union" => Ok(Self::Unions),
            "table" | "markdown" | "md" => Ok(Self::Table),
            _ => Err(DeclError::UnknownFormat(s.to_owned())),
        }
    }
}

/// `SwizzleNames{len}In{max_index + 1}`
pub fn union_ident(key: BucketKey) -> String {
    format!("SwizzleNames{}In{}", key.len(), key.arity())
}

/// Renders the table in the given shape.
pub fn render(table: &SwizzleTable, config: &EmitConfig, format: OutputFormat) -> String {
    match format {
        OutputFormat::Declarations => emit_declarations(table, config).build_pretty(),
        OutputFormat::Unions => emit_unions(table, config).build_pretty(),
        OutputFormat::Table => render_table(table),
    }
}

/// Builds one alias per bucket, e.g. `type SwizzleNames1In1 = 'x' | 'r' | 's';`.
pub fn emit_unions(table: &SwizzleTable, config: &EmitConfig) -> DeclModule {
    let mut module = DeclModule::new();
    for (key, _) in table.iter() {
        let names = table.names(key).map(TsType::StringLiteral).collect();
        let mut alias = TsTypeAlias::new(union_ident(key), Vec::new(), TsType::union(names));
        alias.export = config.export;
        module.push_type_alias(alias);
    }
    module
}

fn render_table(table: &SwizzleTable) -> String {
    let mut buf = String::new();
    buf.push_str("| length | max index | count | names |\n");
    buf.push_str("|---|---|---|---|\n");
    for (key, patterns) in table.iter() {
        let names: Vec<String> = table.names(key).collect();
        // Writing into a `String` never fails.
        let _ = writeln!(
            buf,
            "| {} | {} | {} | {} |",
            key.len(),
            key.max_index(),
            patterns.len(),
            names.join(" ")
        );
    }
    buf
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_from_str() {
        assert_eq!("unions".parse::<OutputFormat>(), Ok(OutputFormat::Unions));
        assert_eq!("table".parse::<OutputFormat>(), Ok(OutputFormat::Table));
        assert_eq!(
            "json".parse::<OutputFormat>(),
            Err(DeclError::UnknownFormat("json".into()))
        );
    }

    #[test]
    fn test_unions() {
        let table = SwizzleTable::generate();
        let out = render(&table, &EmitConfig::default(), OutputFormat::Unions);
        assert!(out.starts_with("export type SwizzleNames1In1 = 'x' | 'r' | 's';\n\n"));
        assert!(out.contains("export type SwizzleNames2In2 = 'xy' | 'rg' | 'st' | 'yx' | 'gr' | 'ts' | 'yy' | 'gg' | 'tt';"));
    }

    #[test]
    fn test_table() {
        let table = SwizzleTable::generate();
        let out = render(&table, &EmitConfig::default(), OutputFormat::Table);
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 2 + 16);
        assert_eq!(lines[2], "| 1 | 0 | 1 | x r s |");
        assert_eq!(lines[3], "| 2 | 0 | 1 | xx rr ss |");
    }
}
