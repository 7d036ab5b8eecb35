use pretty_assertions::assert_eq;
use swizzle_typegen::{
    check::Checker,
    cli::parse_cli,
    decl::{EmitConfig, OutputFormat, emit_declarations},
    generate,
    names::SwizzleTable,
};

#[test]
fn test_default_output() {
    let cli = parse_cli(&[]).unwrap();
    let text = generate(cli.format, &cli.emit_config());

    assert!(text.starts_with("export interface Swizzle1In1Out<T> {\n    get x(): Float<T>;\n"));
    assert!(text.ends_with("\n\n"));
    assert_eq!(text.matches("export interface Swizzle").count(), 20);
    assert_eq!(text.matches("export type SwizzleIn").count(), 4);
    assert_eq!(text, generate(cli.format, &cli.emit_config()));
}

#[test]
fn test_interfaces_only_output_is_prefix() {
    let core = generate(OutputFormat::Declarations, &EmitConfig::interfaces_only());
    let full = generate(OutputFormat::Declarations, &EmitConfig::default());

    assert!(full.starts_with(&core));
    assert_eq!(core.matches("export interface ").count(), 16);
    assert!(!core.contains("setX("));
    assert!(!core.contains("flip"));
    assert!(core.ends_with("}\n\n"));
}

#[test]
fn test_union_output() {
    let text = generate(OutputFormat::Unions, &EmitConfig::default());
    let first = text.lines().next().unwrap();

    assert_eq!(first, "export type SwizzleNames1In1 = 'x' | 'r' | 's';");
    assert_eq!(text.matches("export type ").count(), 16);
    assert_eq!(text.matches('\'').count(), 2 * 3 * 340);
}

#[test]
fn test_table_output() {
    let text = generate(OutputFormat::Table, &EmitConfig::default());
    let mut lines = text.lines();

    assert_eq!(lines.next(), Some("| length | max index | count | names |"));
    assert_eq!(lines.next(), Some("|---|---|---|---|"));
    assert_eq!(lines.count(), 16);
}

#[test]
fn test_generated_declarations_type_check() {
    let config = EmitConfig::default();
    let module = emit_declarations(&SwizzleTable::generate(), &config);
    let checker = Checker::new(&module, &config);

    assert_eq!(checker.check("vec3.xy").unwrap().to_string(), "Vec2<T>");
    assert!(checker.check("vec3.xr").is_err());
    assert!(checker.check("vec3.xy = float").is_ok());
    assert!(checker.check("vec3.xy = vec3").is_err());
}
