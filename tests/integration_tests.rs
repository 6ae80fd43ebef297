//! Интеграционные тесты для ddlgen
//!
//! Проверяют взаимодействие всех стадий конвейера: лексер, фильтр,
//! парсер, резолвер и генератор — от текста схемы до готового SQL.

use ddlgen::codegen::SqlGenerator;
use ddlgen::common::GeneratorConfig;
use ddlgen::parser::{parse_schema, stream, SchemaParser};
use ddlgen::{compile, Error};

/// Демонстрационная схема: прямые ссылки, составной ключ,
/// цепочка внешних ключей
const DEMO_SCHEMA: &str = "
customers {
\tid int pk
\tname string(42)
\tphone string(512) null
}

invoices {
\tid int pk; sent_on date; filled_on date  null; customer fk(customers)
}

blocks { id int(64) pk; content binary(512) }

modifications {
\tat timestamp pk
\ttarget fk(blocks) pk
}

editors {
\tid int(16) pk
\tis_admin  bool
\tmost_recent_edit fk(modifications) null
}
";

#[test]
fn test_compile_demo_schema() {
    let statements = compile(DEMO_SCHEMA).unwrap();

    assert_eq!(statements.len(), 5);
    // утверждения следуют порядку объявления таблиц
    assert!(statements[0].starts_with("CREATE TABLE IF NOT EXISTS customers ("));
    assert!(statements[1].starts_with("CREATE TABLE IF NOT EXISTS invoices ("));
    assert!(statements[4].starts_with("CREATE TABLE IF NOT EXISTS editors ("));
}

#[test]
fn test_compile_exact_statement_text() {
    let statements = compile(DEMO_SCHEMA).unwrap();

    assert_eq!(
        statements[1],
        "CREATE TABLE IF NOT EXISTS invoices (\n\
         id INT NOT NULL,\n\
         sent_on DATE NOT NULL,\n\
         filled_on DATE NULL,\n\
         customer_id INT NOT NULL,\n\
         FOREIGN KEY (customer_id) REFERENCES customers(id),\n\
         PRIMARY KEY (id)\n\
         ) ENGINE=InnoDB DEFAULT CHARSET=utf8;\n"
    );
}

#[test]
fn test_compile_is_deterministic() {
    assert_eq!(compile(DEMO_SCHEMA).unwrap(), compile(DEMO_SCHEMA).unwrap());
}

#[test]
fn test_parse_through_token_stream() {
    // конкурентный производитель токенов и прямой лексер дают одну схему
    let streamed = SchemaParser::new(stream::spawn(DEMO_SCHEMA.as_bytes()))
        .parse()
        .unwrap();
    let pulled = parse_schema(DEMO_SCHEMA).unwrap();
    assert_eq!(streamed, pulled);
}

#[test]
fn test_parser_failure_stops_producer() {
    // парсер падает на первой таблице, производитель ещё полон токенов;
    // выход без зависания означает, что производитель остановлен
    let tokens = stream::spawn("broken {\n}\ncustomers { id int pk }".as_bytes());
    let err = SchemaParser::new(tokens).parse().unwrap_err();
    assert!(matches!(err, Error::Syntax { .. }));
}

#[test]
fn test_no_partial_schema_on_error() {
    // ошибка в последней таблице: схема не возвращается вовсе
    let result = parse_schema("customers { id int pk }\nbroken { id wat }");
    assert!(matches!(result, Err(Error::Semantic { .. })));
}

#[test]
fn test_configured_generation_end_to_end() {
    let schema = parse_schema(DEMO_SCHEMA).unwrap();
    let generator = SqlGenerator::with_config(GeneratorConfig {
        engine: "MyISAM".to_string(),
        charset: "cp1251".to_string(),
    });

    for table in schema.tables() {
        let statement = generator.create_statement(&schema, table).unwrap();
        assert!(statement.contains("ENGINE=MyISAM DEFAULT CHARSET=cp1251"));
    }
}

#[test]
fn test_schema_serializes_to_json() {
    let schema = parse_schema(DEMO_SCHEMA).unwrap();
    let json = serde_json::to_string_pretty(&schema).unwrap();

    assert!(json.contains("\"customers\""));
    assert!(json.contains("\"fk_target\": \"blocks\""));
}
