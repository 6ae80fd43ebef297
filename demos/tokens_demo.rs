//! Пример работы лексического анализатора ddlgen

use ddlgen::parser::Lexer;

fn main() {
    println!("🔍 Демонстрация лексического анализатора ddlgen\n");

    let text = "
customers {
\tid int pk
\tname string(42)
\tphone string(512) null
}

invoices {
\tid int pk; sent_on date; filled_on date  null
}
";

    let mut lexer = Lexer::new(text.as_bytes());
    loop {
        match lexer.next_token() {
            Ok(Some(token)) => println!("   {}", token),
            Ok(None) => break,
            Err(err) => {
                println!("Ошибка:");
                println!("{}", err);
                return;
            }
        }
    }

    println!("\n✅ Демонстрация завершена успешно!");
}
