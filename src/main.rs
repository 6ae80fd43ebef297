//! Главный исполняемый файл ddlgen

use anyhow::Context;
use ddlgen::cli::{Cli, Commands};
use ddlgen::codegen::SqlGenerator;
use ddlgen::parser::{stream, SchemaParser};
use ddlgen::VERSION;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::init();

    match &cli.command {
        Some(Commands::Generate {
            schema,
            engine,
            charset,
        }) => {
            let mut config = cli.load_config()?;
            if let Some(engine) = engine {
                config.engine = engine.clone();
            }
            if let Some(charset) = charset {
                config.charset = charset.clone();
            }
            config.validate()?;

            let tokens = stream::spawn(open_schema(schema)?);
            let parsed = SchemaParser::new(tokens)
                .parse()
                .with_context(|| format!("не удалось разобрать схему {}", schema.display()))?;
            log::info!("схема {} разобрана успешно", schema.display());

            let generator = SqlGenerator::with_config(config);
            for table in parsed.tables() {
                println!("{}:", table.name);
                println!("{}", generator.create_statement(&parsed, table)?);
            }
        }
        Some(Commands::Tokens { schema }) => {
            let mut lexer = ddlgen::parser::Lexer::new(open_schema(schema)?);
            while let Some(token) = lexer.next_token()? {
                println!("{}", token);
            }
        }
        Some(Commands::Dump { schema }) => {
            let tokens = stream::spawn(open_schema(schema)?);
            let parsed = SchemaParser::new(tokens)
                .parse()
                .with_context(|| format!("не удалось разобрать схему {}", schema.display()))?;
            println!("{}", serde_json::to_string_pretty(&parsed)?);
        }
        Some(Commands::Info) => {
            println!("ddlgen v{}", VERSION);
            println!("Компилятор DSL описания схемы данных в SQL DDL");
        }
        None => {
            println!("ddlgen v{}", VERSION);
            println!("Используйте --help для получения справки");
        }
    }

    Ok(())
}

/// Открывает файл схемы для буферизованного чтения
fn open_schema(path: &Path) -> anyhow::Result<BufReader<File>> {
    let file =
        File::open(path).with_context(|| format!("не удалось открыть файл {}", path.display()))?;
    Ok(BufReader::new(file))
}
