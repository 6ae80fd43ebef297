//! Общие утилиты для тестирования

use crate::parser::{parse_schema, SchemaSpec};

/// Демонстрационная схема с прямыми ссылками, составными ключами
/// и цепочкой внешних ключей
pub const SAMPLE_SCHEMA: &str = "
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

/// Разбирает демонстрационную схему
pub fn sample_schema() -> SchemaSpec {
    parse_schema(SAMPLE_SCHEMA).expect("демонстрационная схема должна разбираться")
}
