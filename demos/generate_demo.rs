//! Пример компиляции схемы данных в CREATE TABLE утверждения

use ddlgen::codegen::SqlGenerator;
use ddlgen::parser::parse_schema;

fn main() {
    println!("🛠  Демонстрация компилятора схем ddlgen\n");

    let text = "
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

    let schema = match parse_schema(text) {
        Ok(schema) => schema,
        Err(err) => {
            println!("Ошибка:");
            println!("{}", err);
            return;
        }
    };

    println!("Схема разобрана успешно\n");
    let generator = SqlGenerator::new();
    for table in schema.tables() {
        println!("{}:", table.name);
        println!("{}", generator.create_statement(&schema, table).unwrap());
    }

    println!("✅ Демонстрация завершена успешно!");
}
