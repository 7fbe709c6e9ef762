//! SQL INSERT rendering.
//!
//! The renderer is a pure mapping from (dialect, record) to statement text.
//! Records describe themselves as a row of [`SqlValue`]s via the [`Record`]
//! trait; the dialect's [`LiteralStyle`](crate::dialect::LiteralStyle) decides
//! how non-portable values are spelled.

mod rows;

use crate::dialect::Dialect;
use crate::generator::GeneratedData;
use crate::model::Money;
use crate::table::Table;
use crate::writer::SqlWriter;
use chrono::{NaiveDate, NaiveDateTime};
use std::io::{self, Write};

const DATE_FORMAT: &str = "%Y-%m-%d";
const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// SQL value representation
#[derive(Debug, Clone, PartialEq)]
pub enum SqlValue {
    Null,
    Int(i64),
    Money(Money),
    Text(String),
    Bool(bool),
    Date(NaiveDate),
    Timestamp(NaiveDateTime),
}

impl SqlValue {
    /// Text value, or NULL when absent
    pub fn opt_text(value: Option<&str>) -> SqlValue {
        value.map_or(SqlValue::Null, |s| SqlValue::Text(s.to_string()))
    }

    /// Ordinal reference, or NULL when absent
    pub fn opt_ordinal(value: Option<usize>) -> SqlValue {
        value.map_or(SqlValue::Null, SqlValue::ordinal)
    }

    pub fn ordinal(value: usize) -> SqlValue {
        SqlValue::Int(value as i64)
    }

    pub fn opt_timestamp(value: Option<NaiveDateTime>) -> SqlValue {
        value.map_or(SqlValue::Null, SqlValue::Timestamp)
    }
}

/// A generated record that can be written as one row of a table
pub trait Record {
    const TABLE: Table;

    /// Values in the order of `Self::TABLE.columns()`
    fn values(&self) -> Vec<SqlValue>;
}

/// Double embedded single quotes
fn escape_string(s: &str) -> String {
    s.replace('\'', "''")
}

/// Renders records as INSERT statements for one dialect
#[derive(Debug, Clone, Copy)]
pub struct Renderer {
    dialect: Dialect,
}

impl Renderer {
    pub fn new(dialect: Dialect) -> Self {
        Self { dialect }
    }

    /// Format a single value as a SQL literal
    pub fn format_value(&self, value: &SqlValue) -> String {
        let style = self.dialect.style();
        match value {
            SqlValue::Null => "NULL".to_string(),
            SqlValue::Int(n) => n.to_string(),
            SqlValue::Money(m) => m.to_string(),
            SqlValue::Text(s) => format!("'{}'", escape_string(s)),
            SqlValue::Bool(b) => (style.boolean)(*b).to_string(),
            SqlValue::Date(d) => (style.date)(&d.format(DATE_FORMAT).to_string()),
            SqlValue::Timestamp(ts) => (style.timestamp)(&ts.format(TIMESTAMP_FORMAT).to_string()),
        }
    }

    /// `INSERT INTO <Table> (<columns>) VALUES (<literals>);`
    pub fn render_insert<R: Record>(&self, record: &R) -> String {
        let values = record
            .values()
            .iter()
            .map(|v| self.format_value(v))
            .collect::<Vec<_>>()
            .join(", ");
        format!(
            "INSERT INTO {} ({}) VALUES ({});",
            R::TABLE.sql_name(),
            R::TABLE.columns().join(", "),
            values
        )
    }

    /// Write the selected tables, each as a header comment plus statements.
    ///
    /// Output is buffered and flushed once at the end.
    pub fn write_dataset<W: Write>(
        &self,
        data: &GeneratedData,
        tables: &[Table],
        writer: W,
    ) -> io::Result<()> {
        let mut out = SqlWriter::new(writer);
        for (i, &table) in tables.iter().enumerate() {
            if i > 0 {
                out.write_blank_line()?;
            }
            out.write_comment(&format!(
                "{} ({} records)",
                table.sql_name(),
                data.count(table)
            ))?;
            match table {
                Table::Customers => self.write_records(&mut out, &data.customers)?,
                Table::Products => self.write_records(&mut out, &data.products)?,
                Table::Employees => self.write_records(&mut out, &data.employees)?,
                Table::Orders => self.write_records(&mut out, &data.orders)?,
                Table::OrderDetails => self.write_records(&mut out, &data.order_details)?,
            }
        }
        out.flush()
    }

    fn write_records<W: Write, R: Record>(
        &self,
        out: &mut SqlWriter<W>,
        records: &[R],
    ) -> io::Result<()> {
        for record in records {
            out.write_statement(&self.render_insert(record))?;
        }
        Ok(())
    }

    /// Render the selected tables into a string
    pub fn render_to_string(&self, data: &GeneratedData, tables: &[Table]) -> io::Result<String> {
        let mut buf = Vec::new();
        self.write_dataset(data, tables, &mut buf)?;
        String::from_utf8(buf).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fake::ymd;

    #[test]
    fn test_format_text_escapes_quotes() {
        let r = Renderer::new(Dialect::MySql);
        assert_eq!(
            r.format_value(&SqlValue::Text("O'Brien".to_string())),
            "'O''Brien'"
        );
    }

    #[test]
    fn test_format_null_and_numbers() {
        let r = Renderer::new(Dialect::Sqlite);
        assert_eq!(r.format_value(&SqlValue::Null), "NULL");
        assert_eq!(r.format_value(&SqlValue::Int(42)), "42");
        assert_eq!(
            r.format_value(&SqlValue::Money(Money::from_units(2_000_000))),
            "2000000.00"
        );
    }

    #[test]
    fn test_format_dates_per_dialect() {
        let date = SqlValue::Date(ymd(1985, 4, 1));
        assert_eq!(
            Renderer::new(Dialect::MsSql).format_value(&date),
            "'1985-04-01'"
        );
        assert_eq!(
            Renderer::new(Dialect::Oracle).format_value(&date),
            "TO_DATE('1985-04-01', 'YYYY-MM-DD')"
        );

        let ts = SqlValue::Timestamp(ymd(2024, 2, 29).and_hms_opt(7, 5, 9).unwrap());
        assert_eq!(
            Renderer::new(Dialect::Postgres).format_value(&ts),
            "'2024-02-29 07:05:09'"
        );
        assert_eq!(
            Renderer::new(Dialect::Oracle).format_value(&ts),
            "TO_TIMESTAMP('2024-02-29 07:05:09', 'YYYY-MM-DD HH24:MI:SS')"
        );
    }

    #[test]
    fn test_format_bool() {
        assert_eq!(
            Renderer::new(Dialect::Postgres).format_value(&SqlValue::Bool(false)),
            "FALSE"
        );
        assert_eq!(
            Renderer::new(Dialect::Oracle).format_value(&SqlValue::Bool(true)),
            "1"
        );
    }

    struct CountingSink {
        bytes: usize,
        flushes: usize,
    }

    impl Write for CountingSink {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.bytes += buf.len();
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            self.flushes += 1;
            Ok(())
        }
    }

    #[test]
    fn test_write_dataset_flushes_once() {
        let data = crate::generator::Generator::new(3).generate(100).unwrap();
        let mut sink = CountingSink {
            bytes: 0,
            flushes: 0,
        };
        Renderer::new(Dialect::MsSql)
            .write_dataset(&data, &Table::ALL, &mut sink)
            .unwrap();

        assert!(sink.bytes > 0);
        assert_eq!(sink.flushes, 1);
    }
}
